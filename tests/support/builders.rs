// tests/support/builders.rs
use car_registry::application::{
    commands::{cars::SaveCarCommand, users::SaveUserCommand},
    dto::Principal,
};
use car_registry::domain::user::{Role, User};
use chrono::Duration;

use super::mocks::fixed_now;

/// 有効なサインアップ用コマンド（login から email を導出）
pub fn sample_user(login: &str) -> SaveUserCommand {
    SaveUserCommand {
        id: None,
        first_name: Some("Ricardo".into()),
        last_name: Some("Silva".into()),
        birth_date: Some("15/03/1990".into()),
        email: Some(format!("{login}@example.com")),
        login: Some(login.into()),
        password: Some("abcdef".into()),
        phone: Some("81988887777".into()),
    }
}

/// 有効な車の登録コマンド
pub fn sample_car(plate: &str) -> SaveCarCommand {
    SaveCarCommand {
        id: None,
        year: Some(2018),
        license_plate: Some(plate.into()),
        model: Some("Audi".into()),
        color: Some("White".into()),
    }
}

pub fn principal_for(user: User) -> Principal {
    Principal {
        user,
        role: Role::User,
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::days(1),
    }
}
