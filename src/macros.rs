/// Helper macro for locking items
///
/// ```rust, ignore
///  let mut calls = lock!(self.calls);
///  calls.push(request);
/// ```
macro_rules! lock {
    ($lock:expr) => {
        $lock.lock().expect("Failed to acquire lock")
    };
}
