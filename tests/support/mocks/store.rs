// tests/support/mocks/store.rs
//! ユーザーと車を共有するインメモリストア（両リポジトリを実装）
use async_trait::async_trait;
use car_registry::domain::{
    car::{Car, CarId, CarRepository, CarUpdate, NewCar},
    errors::{DomainError, DomainResult, Resource, UniqueField},
    pagination::{Page, PageRequest},
    user::{Login, NewUser, User, UserId, UserRepository, UserUpdate},
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct StoreState {
    users: BTreeMap<i64, User>,
    cars: BTreeMap<i64, Car>,
    next_user_id: i64,
    next_car_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn user(&self, id: UserId) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id.0).cloned()
    }

    pub fn car(&self, id: CarId) -> Option<Car> {
        self.inner.lock().unwrap().cars.get(&id.0).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn car_count(&self) -> usize {
        self.inner.lock().unwrap().cars.len()
    }
}

fn paginate<T: Clone>(items: &[T], page: PageRequest) -> Page<T> {
    let offset = usize::try_from(page.offset()).unwrap();
    Page {
        items: items
            .iter()
            .skip(offset)
            .take(page.size() as usize)
            .cloned()
            .collect(),
        total: items.len() as u64,
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.inner.lock().unwrap();
        if state.users.values().any(|u| u.login == new_user.login) {
            return Err(DomainError::AlreadyExists(UniqueField::Login));
        }
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::AlreadyExists(UniqueField::Email));
        }

        state.next_user_id += 1;
        let user = User {
            id: UserId::new(state.next_user_id)?,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            birth_date: new_user.birth_date,
            email: new_user.email,
            login: new_user.login,
            password_hash: new_user.password_hash,
            phone: new_user.phone,
            created_at: new_user.created_at,
            last_login: None,
            total_usage_counter: 0,
        };
        state.users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.inner.lock().unwrap();
        let user = state
            .users
            .get_mut(&update.id.0)
            .ok_or(DomainError::NotFound(Resource::User))?;

        user.first_name = update.first_name;
        user.last_name = update.last_name;
        user.birth_date = update.birth_date;
        user.email = update.email;
        user.login = update.login;
        user.password_hash = update.password_hash;
        user.phone = update.phone;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.values().find(|u| &u.login == login).cloned())
    }

    async fn count_by_login(&self, login: &str, exclude: Option<UserId>) -> DomainResult<u64> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .users
            .values()
            .filter(|u| u.login.as_str() == login && Some(u.id) != exclude)
            .count() as u64)
    }

    async fn count_by_email(&self, email: &str, exclude: Option<UserId>) -> DomainResult<u64> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .users
            .values()
            .filter(|u| u.email.as_str() == email && Some(u.id) != exclude)
            .count() as u64)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .users
            .remove(&id.0)
            .ok_or(DomainError::NotFound(Resource::User))?;
        state.cars.retain(|_, car| car.owner_id != id);
        Ok(())
    }

    async fn list_ranked(&self, page: PageRequest) -> DomainResult<Page<User>> {
        let state = self.inner.lock().unwrap();
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| {
            b.total_usage_counter
                .cmp(&a.total_usage_counter)
                .then_with(|| a.login.as_str().cmp(b.login.as_str()))
        });
        Ok(paginate(&users, page))
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if let Some(user) = state.users.get_mut(&id.0) {
            user.last_login = Some(at);
        }
        Ok(())
    }

    async fn refresh_usage_total(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let total = state
            .cars
            .values()
            .filter(|car| car.owner_id == id)
            .map(|car| car.usage_counter)
            .sum();
        if let Some(user) = state.users.get_mut(&id.0) {
            user.total_usage_counter = total;
        }
        Ok(())
    }

    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let mut state = self.inner.lock().unwrap();
        let stale: Vec<UserId> = state
            .users
            .values()
            .filter(|u| u.last_activity() < cutoff)
            .map(|u| u.id)
            .collect();
        for id in &stale {
            state.users.remove(&id.0);
        }
        state.cars.retain(|_, car| !stale.contains(&car.owner_id));
        Ok(stale.len() as u64)
    }
}

/* -------------------------------- CarRepository -------------------------------- */

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn insert(&self, new_car: NewCar) -> DomainResult<Car> {
        let mut state = self.inner.lock().unwrap();
        if state
            .cars
            .values()
            .any(|c| c.license_plate == new_car.license_plate)
        {
            return Err(DomainError::AlreadyExists(UniqueField::LicensePlate));
        }

        state.next_car_id += 1;
        let car = Car {
            id: CarId::new(state.next_car_id)?,
            year: new_car.year,
            license_plate: new_car.license_plate,
            model: new_car.model,
            color: new_car.color,
            created_at: new_car.created_at,
            usage_counter: 0,
            owner_id: new_car.owner_id,
        };
        state.cars.insert(car.id.0, car.clone());
        Ok(car)
    }

    async fn update(&self, update: CarUpdate) -> DomainResult<Car> {
        let mut state = self.inner.lock().unwrap();
        let car = state
            .cars
            .get_mut(&update.id.0)
            .ok_or(DomainError::NotFound(Resource::Car))?;

        car.year = update.year;
        car.license_plate = update.license_plate;
        car.model = update.model;
        car.color = update.color;
        Ok(car.clone())
    }

    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>> {
        Ok(self.car(id))
    }

    async fn count_by_plate(&self, plate: &str, exclude: Option<CarId>) -> DomainResult<u64> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .cars
            .values()
            .filter(|c| c.license_plate.as_str() == plate && Some(c.id) != exclude)
            .count() as u64)
    }

    async fn delete(&self, id: CarId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .cars
            .remove(&id.0)
            .map(|_| ())
            .ok_or(DomainError::NotFound(Resource::Car))
    }

    async fn list_by_owner(&self, owner: UserId, page: PageRequest) -> DomainResult<Page<Car>> {
        let state = self.inner.lock().unwrap();
        let mut cars: Vec<Car> = state
            .cars
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect();
        cars.sort_by(|a, b| {
            b.usage_counter
                .cmp(&a.usage_counter)
                .then_with(|| a.model.as_str().cmp(b.model.as_str()))
        });
        Ok(paginate(&cars, page))
    }

    async fn increment_usage(&self, id: CarId, owner: UserId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if let Some(car) = state.cars.get_mut(&id.0) {
            if car.owner_id == owner {
                car.usage_counter += 1;
            }
        }
        Ok(())
    }
}
