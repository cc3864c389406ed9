use crate::maybe::Iter;
use crate::types::Errors;
use crate::validation::core::Validation;

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub enum ErrorsIterMut<'a, E> {
    Empty,
    Multi(core::slice::IterMut<'a, E>),
}

impl<'a, E> Iterator for ErrorsIterMut<'a, E> {
    type Item = &'a mut E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ErrorsIterMut::Empty => None,
            ErrorsIterMut::Multi(it) => it.next(),
        }
    }
}

impl<T, E> IntoIterator for Validation<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<'a, T, E> IntoIterator for &'a Validation<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Validation<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Validation<T, E> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: self.value_mut() }
    }

    /// Iterates over the accumulated errors in order; empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self.errors() {
            Some(errors) => errors.as_slice().iter(),
            None => <&[E]>::default().iter(),
        }
    }

    pub fn iter_errors_mut(&mut self) -> ErrorsIterMut<'_, E> {
        match self.errors_mut() {
            Some(errors) => ErrorsIterMut::Multi(errors.iter_mut()),
            None => ErrorsIterMut::Empty,
        }
    }
}

/// Collects validations, keeping every value when all are valid and every error otherwise.
///
/// Errors are concatenated in the order the elements are produced.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::Validation;
///
/// let items = vec![Validation::valid(10), Validation::invalid("bad"), Validation::invalid("worse")];
/// let collected: Validation<Vec<i32>, &str> = items.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().as_slice(), &["bad", "worse"]);
/// ```
impl<T, E, C> FromIterator<Validation<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validation<T, E>>>(iter: I) -> Self {
        let mut accumulated: Option<Errors<E>> = None;
        let values: C = iter
            .into_iter()
            .filter_map(|validation| match validation.into_result() {
                Ok(value) => Some(value),
                Err(errors) => {
                    match accumulated.as_mut() {
                        Some(acc) => acc.append(errors),
                        None => accumulated = Some(errors),
                    }
                    None
                },
            })
            .collect();

        match accumulated {
            Some(errors) => Validation::invalid_all(errors),
            None => Validation::valid(values),
        }
    }
}

/// Collects results, accumulating every `Err` instead of stopping at the first.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::Validation;
///
/// let inputs = vec![Ok(1), Err("err1"), Err("err2")];
/// let collected: Validation<Vec<i32>, &str> = inputs.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<T, E, C> FromIterator<Result<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        iter.into_iter().map(Validation::from_result).collect()
    }
}
