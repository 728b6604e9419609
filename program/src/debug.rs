/// Debug logging macro that forwards to pinocchio_log::log! when the `debug`
/// feature is enabled and compiles to nothing otherwise.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        pinocchio_log::log!($($arg)*)
    };
}
