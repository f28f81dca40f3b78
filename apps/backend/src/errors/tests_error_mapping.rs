// Unit tests for error mapping - pure domain logic without HTTP dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let cases = [
        (ValidationKind::InvalidDirection, ErrorCode::InvalidDirection),
        (ValidationKind::MissingGameId, ErrorCode::MissingGameId),
        (ValidationKind::MissingPlayerId, ErrorCode::MissingPlayerId),
        (ValidationKind::GameOver, ErrorCode::GameOver),
        (ValidationKind::InvalidSubmission, ErrorCode::InvalidSubmission),
    ];

    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), expected);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "no player").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Storage, "disk full").into();
    assert_eq!(app.code().as_str(), "STORAGE_ERROR");
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::Storage { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad json").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn config_errors_are_internal() {
    let app = AppError::config("PORT must be a number".to_string());
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::GameOver, "Game over");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::GameOver, _)
    ));

    let not_found = DomainError::not_found(NotFoundKind::Game, "missing");
    assert!(matches!(not_found, DomainError::NotFound(NotFoundKind::Game, _)));

    let infra = DomainError::infra(InfraErrorKind::Storage, "down");
    assert!(matches!(infra, DomainError::Infra(InfraErrorKind::Storage, _)));
}
