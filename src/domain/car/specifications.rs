use crate::domain::car::entity::Car;
use crate::domain::user::value_objects::UserId;

/// Only the owner may read, change or remove a car.
pub struct CarOwnershipSpec<'a> {
    car: &'a Car,
    user_id: UserId,
}

impl<'a> CarOwnershipSpec<'a> {
    pub fn new(car: &'a Car, user_id: UserId) -> Self {
        Self { car, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.car.is_owned_by(self.user_id)
    }
}
