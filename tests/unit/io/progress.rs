//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use camogen::io::progress::ProgressManager;

    // Tests completed jobs are counted and reset on initialize
    // Verified by not resetting the counter
    #[test]
    fn test_completed_count() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.start_job("woodland #0");
        pm.complete_job();
        pm.start_job("woodland #1");
        pm.complete_job();
        assert_eq!(pm.completed(), 2);
        pm.finish();

        pm.initialize(1);
        assert_eq!(pm.completed(), 0);
    }

    // Tests calls before initialize do not panic
    // Verified by unwrapping the bar
    #[test]
    fn test_uninitialized_manager() {
        let mut pm = ProgressManager::default();
        pm.start_job("dpm #0");
        pm.complete_job();
        pm.finish();
        assert_eq!(pm.completed(), 1);
    }
}
