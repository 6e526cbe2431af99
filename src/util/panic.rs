/// Asserts that `$run` panics. With a trailing `contains [..]` list, also asserts that the panic
/// message mentions every listed fragment.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, contains [$($fragment:expr),+ $(,)?]) => {
        let payload = std::panic::catch_unwind(|| $run)
            .expect_err("assertion failed to panic");
        let message = $crate::util::panic::panic_message(&*payload);
        $(
            assert!(
                message.contains($fragment),
                "panic message {:?} should mention {:?}",
                message,
                $fragment
            );
        )+
        println!("^ panic caught");
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

/// Extracts the text of a panic payload, which is either a `&str` or a `String`.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}

pub(crate) use assert_panics;
