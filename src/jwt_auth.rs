use std::future::{ready, Ready};

use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{dev::Payload, http, web, Error as ActixWebError, FromRequest, HttpRequest};
use jsonwebtoken::{decode, DecodingKey, Validation};
use log::{error, warn};

use crate::{
	api::AuthProvider,
	models::{AuthUser, TokenClaims},
	AppState, ErrorResponse,
};

/// Caller identity from the `token` cookie or an `Authorization: Bearer`
/// header. Requests without a token act as the guest user; requests with a
/// token that does not verify are rejected.
#[derive(Debug, Clone)]
pub struct Identity {
	pub user: Option<AuthUser>,
}

impl AuthProvider for Identity {
	fn current_user(&self) -> Option<AuthUser> {
		self.user.clone()
	}
}

impl FromRequest for Identity {
	type Error = ActixWebError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
		let token = req
			.cookie("token")
			.map(|c| c.value().to_string())
			.or_else(|| {
				req.headers()
					.get(http::header::AUTHORIZATION)
					.and_then(|h| h.to_str().ok())
					.and_then(|h| h.strip_prefix("Bearer "))
					.map(|h| h.trim().to_string())
			});

		let Some(token) = token else {
			return ready(Ok(Identity { user: None }));
		};

		let Some(data) = req.app_data::<web::Data<AppState>>() else {
			error!("AppState missing from request, cannot verify token");
			return ready(Err(ErrorInternalServerError(ErrorResponse {
				status: "error".to_string(),
				message: "Server misconfigured".to_string(),
			})));
		};

		match decode::<TokenClaims>(
			&token,
			&DecodingKey::from_secret(data.env.jwt_secret.as_ref()),
			&Validation::default(),
		) {
			Ok(c) => ready(Ok(Identity {
				user: Some(AuthUser {
					id: c.claims.sub,
					email: c.claims.email,
				}),
			})),
			Err(e) => {
				warn!("Rejected token: {}", e);
				ready(Err(ErrorUnauthorized(ErrorResponse {
					status: "fail".to_string(),
					message: "Invalid token".to_string(),
				})))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{test_state, token_for};
	use actix_web::{http::StatusCode, test, HttpResponse, Responder};

	async fn whoami(identity: Identity) -> impl Responder {
		HttpResponse::Ok().body(identity.current_user_id())
	}

	#[actix_web::test]
	async fn resolves_guest_bearer_and_cookie() {
		let app = test::init_service(
			actix_web::App::new()
				.app_data(web::Data::new(test_state()))
				.route("/whoami", web::get().to(whoami)),
		)
		.await;

		let req = test::TestRequest::get().uri("/whoami").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "guest");

		let req = test::TestRequest::get()
			.uri("/whoami")
			.insert_header((
				http::header::AUTHORIZATION,
				format!("Bearer {}", token_for("uid-ana", "ana@example.ph")),
			))
			.to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "uid-ana");

		let req = test::TestRequest::get()
			.uri("/whoami")
			.cookie(actix_web::cookie::Cookie::new(
				"token",
				token_for("uid-ben", "ben@example.ph"),
			))
			.to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "uid-ben");
	}

	#[actix_web::test]
	async fn rejects_tampered_token() {
		let app = test::init_service(
			actix_web::App::new()
				.app_data(web::Data::new(test_state()))
				.route("/whoami", web::get().to(whoami)),
		)
		.await;

		let req = test::TestRequest::get()
			.uri("/whoami")
			.insert_header((http::header::AUTHORIZATION, "Bearer not.a.token"))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
	}
}
