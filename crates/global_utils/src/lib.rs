pub const DEBUG_ENV: &str = "LABDESK_DEBUG";

/// `dbg!` that only fires in debug builds or when `LABDESK_DEBUG` is set.
#[macro_export]
macro_rules! print_dbg {
    ( $( $x:expr ),* ) => {
        $(
            if $crate::is_debug!() {
                dbg!($x);
            }
        )*
    };
}

#[macro_export]
macro_rules! is_debug {
    () => {
        cfg!(debug_assertions) || std::env::var($crate::DEBUG_ENV).ok().is_some()
    };
}
