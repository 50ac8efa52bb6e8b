//! Intent marker trait.

/// Marker for values that can drive a [`Reducer`](super::Reducer).
///
/// An intent is either something the user did (typed a character, pressed
/// Enter) or something the controller already resolved on the user's behalf
/// (a validated sign-in, a classified complaint).
pub trait Intent: Send + 'static {}
