//! All-or-nothing combination of independent results.

/// Combine results, succeeding only if every one succeeded.
///
/// On failure every error is returned, in input order.
pub fn combine_all<T, E, I>(results: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Combine a tuple of results with different value types.
pub trait CombineAll {
    /// Tuple of the success values.
    type Output;
    /// Shared error type.
    type Error;

    /// Succeed with every value, or fail with every error.
    fn combine_all(self) -> Result<Self::Output, Vec<Self::Error>>;
}

macro_rules! impl_combine_all {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty,)+ E> CombineAll for ($(Result<$ty, E>,)+) {
            type Output = ($($ty,)+);
            type Error = E;

            fn combine_all(self) -> Result<Self::Output, Vec<E>> {
                let ($($var,)+) = self;
                let mut errors = Vec::new();

                $(
                    let $var = match $var {
                        Ok(value) => Some(value),
                        Err(error) => {
                            errors.push(error);
                            None
                        }
                    };
                )+

                match ($($var,)+) {
                    ($(Some($var),)+) => Ok(($($var,)+)),
                    _ => Err(errors),
                }
            }
        }
    };
}

impl_combine_all!(A a, B b);
impl_combine_all!(A a, B b, C c);
impl_combine_all!(A a, B b, C c, D d);
