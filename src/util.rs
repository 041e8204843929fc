use std::convert::Infallible;

// Unwrap the result of a fallible routine driven by an infallible closure
pub(crate) fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(t) => t,
        Err(never) => match never {},
    }
}
