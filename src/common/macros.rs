#[macro_export]
macro_rules! log_fetch_err {
    // Usage: log_fetch_err!("tours", slug, err);
    ($what:expr, $slug:expr, $err:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::log::warn!(
            "{} lookup for store {:?} failed at {}: {}",
            $what,
            $slug,
            location,
            $err
        );
    }};
}
