use std::any::{self, Any};

pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

pub trait Downcast: Sized {
    type Output<T>;

    fn downcast<T: Any>(self) -> Result<Self::Output<T>, Self>;
}

impl<S> Downcast for Box<S>
where
    S: AsAny + ?Sized,
{
    type Output<T> = Box<T>;

    fn downcast<T: Any>(self) -> Result<Self::Output<T>, Self> {
        if (*self).as_any().is::<T>() {
            let res = self
                .into_any()
                .downcast::<T>()
                .unwrap_or_else(|_| std::unreachable!("`self` should be `Box<T>`"));
            Ok(res)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    trait Trait: AsAny + Send + Sync {}

    impl<T: Send + Sync + 'static> Trait for T {}

    #[test]
    fn downcast_succeeds_when_type_matches() {
        let x: Box<dyn Trait> = Box::new(Arc::new(1i32));

        let y = x.downcast::<Arc<i32>>().unwrap_or(Box::new(Arc::new(0)));
        assert_eq!(**y, 1);
    }

    #[test]
    fn downcast_fails_when_type_mismatches() {
        let x: Box<dyn Trait> = Box::new(Arc::new(1i32));

        let x = x.downcast::<Arc<u32>>().unwrap_err();
        assert_eq!((*x).type_name(), any::type_name::<Arc<i32>>());
    }
}
