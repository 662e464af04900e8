/// A boxed boolean rule over `T`
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Combine rules into their logical AND.
///
/// Rules run in order and evaluation stops at the first one that fails.
/// An empty chain accepts everything.
pub fn chain_and<'a, T: ?Sized + 'a>(predicates: Vec<Predicate<'a, T>>) -> Predicate<'a, T> {
    Box::new(move |item: &T| predicates.iter().all(|predicate| predicate(item)))
}
