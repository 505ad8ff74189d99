use crate::models::AuthUser;

/// Namespace suffix used when nobody is signed in.
pub const GUEST_ID: &str = "guest";

/// Source of the signed-in user. Read on every store call, never cached.
pub trait AuthProvider {
	fn current_user(&self) -> Option<AuthUser>;

	fn current_user_id(&self) -> String {
		self.current_user()
			.map(|user| user.id)
			.unwrap_or_else(|| GUEST_ID.to_string())
	}
}

impl AuthProvider for Option<AuthUser> {
	fn current_user(&self) -> Option<AuthUser> {
		self.clone()
	}
}

impl<A: AuthProvider> AuthProvider for std::sync::Arc<A> {
	fn current_user(&self) -> Option<AuthUser> {
		self.as_ref().current_user()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn guest_when_signed_out() {
		let auth: Option<AuthUser> = None;
		assert_eq!(auth.current_user_id(), "guest");
	}

	#[test]
	fn user_id_when_signed_in() {
		let auth = Some(AuthUser {
			id: "uid-42".to_string(),
			email: Some("juan@example.ph".to_string()),
		});
		assert_eq!(auth.current_user_id(), "uid-42");
	}
}
