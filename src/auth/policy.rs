//! Authorization hook consulted after a credential is found and before anything is sent.

// self
use crate::{
	_prelude::*,
	auth::{Credential, RequestContext},
	gotify::GotifyMessage,
};

/// Boxed future returned by [`Authorizer::authorize`].
pub type AuthorizeFuture<'a> = Pin<Box<dyn Future<Output = AuthorizeDecision> + 'a + Send>>;

/// Decides whether a Gotify request may be forwarded.
///
/// The hook may suspend (call an external service, sleep, etc.) but must resolve. A denial
/// short-circuits the pipeline with a 403 and is not treated as a fault.
pub trait Authorizer
where
	Self: Send + Sync,
{
	/// Evaluates the request.
	fn authorize<'a>(
		&'a self,
		context: &'a RequestContext,
		credential: &'a Credential,
		message: &'a GotifyMessage,
	) -> AuthorizeFuture<'a>;
}

/// Result emitted by an [`Authorizer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizeDecision {
	/// The request may proceed.
	Allow,
	/// The request is refused, with an optional reason returned to the caller.
	Deny(Option<String>),
}
impl AuthorizeDecision {
	/// Denies with a reason.
	pub fn deny(reason: impl Into<String>) -> Self {
		Self::Deny(Some(reason.into()))
	}

	/// Whether the decision lets the request proceed.
	pub fn is_allowed(&self) -> bool {
		matches!(self, Self::Allow)
	}
}

/// Default policy: every request with a credential is allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;
impl Authorizer for AllowAll {
	fn authorize<'a>(
		&'a self,
		_context: &'a RequestContext,
		_credential: &'a Credential,
		_message: &'a GotifyMessage,
	) -> AuthorizeFuture<'a> {
		Box::pin(async { AuthorizeDecision::Allow })
	}
}

/// Adapts an async closure into an [`Authorizer`].
///
/// The closure receives owned clones so the returned future can be `'static`.
#[derive(Clone)]
pub struct AuthorizeFn<F>(F);
impl<F> Debug for AuthorizeFn<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("AuthorizeFn(..)")
	}
}
impl<F, Fut> Authorizer for AuthorizeFn<F>
where
	F: Fn(RequestContext, Credential, GotifyMessage) -> Fut + Send + Sync,
	Fut: Future<Output = AuthorizeDecision> + Send + 'static,
{
	fn authorize<'a>(
		&'a self,
		context: &'a RequestContext,
		credential: &'a Credential,
		message: &'a GotifyMessage,
	) -> AuthorizeFuture<'a> {
		Box::pin((self.0)(context.clone(), credential.clone(), message.clone()))
	}
}

/// Wraps `f` as an [`Authorizer`].
pub fn authorize_fn<F, Fut>(f: F) -> AuthorizeFn<F>
where
	F: Fn(RequestContext, Credential, GotifyMessage) -> Fut + Send + Sync,
	Fut: Future<Output = AuthorizeDecision> + Send + 'static,
{
	AuthorizeFn(f)
}
