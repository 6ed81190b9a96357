use std::io::{self, Write};
use std::time::Instant;

/// Tracker de progreso para recorridos registro a registro del catálogo
pub struct ProgressTracker {
    start_time: Instant,
    total_processed: u64,
    report_interval: u64,
}

impl ProgressTracker {
    pub fn new(report_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            total_processed: 0,
            report_interval,
        }
    }

    pub fn update(&mut self, processed: u64) {
        self.total_processed = processed;

        if self.total_processed % self.report_interval == 0 {
            self.report();
        }
    }

    fn report(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.total_processed as f64 / elapsed
        } else {
            0.0
        };

        print!("\r📊 Productos: {} | Rate: {:.0} rec/s | Time: {:.1}s",
               self.total_processed,
               rate,
               elapsed);
        io::stdout().flush().ok();
    }

    /// Cierra el progreso con el total recorrido
    pub fn finish(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        println!("\n✅ Recorrido completo: {} productos en {:.1}s",
                 self.total_processed,
                 elapsed);
    }
}
