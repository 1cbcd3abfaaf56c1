use super::CarCommandService;
use crate::{
    application::{
        commands::fields::require_present,
        dto::{CarDto, Principal},
        error::ApplicationResult,
    },
    domain::{
        car::{CarAttribute, CarId, CarUpdate, LicensePlate, ModelYear, NewCar},
        errors::{DomainError, UniqueField},
    },
};

/// Create-or-update payload; `id` selects the mode.
#[derive(Debug, Clone, Default)]
pub struct SaveCarCommand {
    pub id: Option<i64>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
}

struct CarFields {
    year: ModelYear,
    license_plate: LicensePlate,
    model: CarAttribute,
    color: CarAttribute,
}

impl SaveCarCommand {
    fn validate(&self, current_year: i32) -> ApplicationResult<CarFields> {
        require_present([
            self.license_plate.as_deref(),
            self.model.as_deref(),
            self.color.as_deref(),
        ])?;
        let year = self.year.ok_or(DomainError::MissingFields)?;

        Ok(CarFields {
            year: ModelYear::new(year, current_year)?,
            license_plate: LicensePlate::new(self.license_plate.as_deref().unwrap_or_default())?,
            model: CarAttribute::new(self.model.clone().unwrap_or_default())?,
            color: CarAttribute::new(self.color.clone().unwrap_or_default())?,
        })
    }
}

impl CarCommandService {
    pub async fn save(
        &self,
        principal: &Principal,
        command: SaveCarCommand,
    ) -> ApplicationResult<CarDto> {
        let fields = command.validate(self.clock.current_year())?;

        match command.id {
            None => self.create_car(principal, fields).await,
            Some(id) => self.update_car(principal, id, fields).await,
        }
    }

    async fn create_car(&self, principal: &Principal, fields: CarFields) -> ApplicationResult<CarDto> {
        self.ensure_plate_available(&fields.license_plate, None)
            .await?;

        let car = self
            .car_repo
            .insert(NewCar {
                year: fields.year,
                license_plate: fields.license_plate,
                model: fields.model,
                color: fields.color,
                owner_id: principal.id(),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(car_id = %car.id, user_id = %principal.id(), "car created");
        Ok(car.into())
    }

    async fn update_car(
        &self,
        principal: &Principal,
        id: i64,
        fields: CarFields,
    ) -> ApplicationResult<CarDto> {
        let existing = self.load_owned(principal, id).await?;

        self.ensure_plate_available(&fields.license_plate, Some(existing.id))
            .await?;

        let car = self
            .car_repo
            .update(CarUpdate {
                id: existing.id,
                year: fields.year,
                license_plate: fields.license_plate,
                model: fields.model,
                color: fields.color,
            })
            .await?;

        Ok(car.into())
    }

    async fn ensure_plate_available(
        &self,
        plate: &LicensePlate,
        exclude: Option<CarId>,
    ) -> ApplicationResult<()> {
        if self.car_repo.count_by_plate(plate.as_str(), exclude).await? > 0 {
            return Err(DomainError::AlreadyExists(UniqueField::LicensePlate).into());
        }
        Ok(())
    }
}
