use {
    std::time::Instant,
    tracing::info,
};

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    lines_read: u64,
    records_saved: u64,
    lines_skipped: u64,
}

impl Progress {
    pub fn new(message: String) -> Self {
        Self {
            message,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            lines_read: 0,
            records_saved: 0,
            lines_skipped: 0,
        }
    }

    pub fn line_read(&mut self) {
        self.lines_read += 1;

        let now = Instant::now();
        if (now - self.reported_at).as_millis() >= 10_000 {
            self.reported_at = now;
            let rate = (self.lines_read as f32) / (now - self.started_at).as_secs_f32();
            info!("{}: {} lines read ({:.2}/second)", self.message, self.lines_read, rate);
        }
    }

    pub fn record_saved(&mut self) {
        self.records_saved += 1;
    }

    pub fn line_skipped(&mut self) {
        self.lines_skipped += 1;
    }

    pub fn finish(&self) {
        info!(
            "{}: done, {} lines read, {} records saved, {} lines skipped",
            self.message,
            self.lines_read,
            self.records_saved,
            self.lines_skipped,
        );
    }
}
