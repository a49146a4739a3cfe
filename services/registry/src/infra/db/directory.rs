//! Records with no owning reference. Plate numbers here are free text.

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};

use fleet_domain::choice::Choice as _;
use fleet_domain::cost_center::CostCenter;
use fleet_domain::id::{EmployeeId, FuelCardId, TireSetId, WorkshopId};
use fleet_domain::pagination::PageRequest;
use fleet_registry_schema::{employees, fuel_cards, tire_sets, workshops};

use super::{replace_row, stored};
use crate::domain::repository::RecordRepository;
use crate::domain::types::{Employee, FuelCard, TireSet, WheelConditions, Workshop};
use crate::error::RegistryError;

// ── Fuel card repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFuelCardRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbFuelCardRepository {
    type Record = FuelCard;

    async fn find_by_id(&self, id: FuelCardId) -> Result<Option<FuelCard>, RegistryError> {
        let model = fuel_cards::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find fuel card by id")?;
        model.map(fuel_card_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<FuelCard>, RegistryError> {
        let models = fuel_cards::Entity::find()
            .order_by_asc(fuel_cards::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list fuel cards")?;
        models.into_iter().map(fuel_card_from_model).collect()
    }

    async fn create(&self, card: &FuelCard) -> Result<(), RegistryError> {
        fuel_card_active_model(card)
            .insert(&self.db)
            .await
            .context("create fuel card")?;
        Ok(())
    }

    async fn update(&self, card: &FuelCard) -> Result<bool, RegistryError> {
        replace_row(&self.db, card.id.0, "fuel card", fuel_card_active_model(card)).await
    }

    async fn delete(&self, id: FuelCardId) -> Result<bool, RegistryError> {
        let result = fuel_cards::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete fuel card")?;
        Ok(result.rows_affected > 0)
    }
}

fn fuel_card_from_model(model: fuel_cards::Model) -> Result<FuelCard, RegistryError> {
    let spending_limit = match model.spending_limit.as_deref() {
        None | Some("") => None,
        Some(value) => Some(stored("spending limit", value)?),
    };
    Ok(FuelCard {
        id: FuelCardId(model.id),
        card_number: model.card_number,
        plate_number: model.plate_number,
        expires_on: model.expires_on,
        pin: model.pin,
        card_type: stored("card type", &model.card_type)?,
        is_active: model.is_active,
        spending_limit,
    })
}

fn fuel_card_active_model(card: &FuelCard) -> fuel_cards::ActiveModel {
    fuel_cards::ActiveModel {
        id: Set(card.id.0),
        card_number: Set(card.card_number.clone()),
        plate_number: Set(card.plate_number.clone()),
        expires_on: Set(card.expires_on),
        pin: Set(card.pin.clone()),
        card_type: Set(card.card_type.value().to_owned()),
        is_active: Set(card.is_active),
        spending_limit: Set(card.spending_limit.map(|l| l.value().to_owned())),
    }
}

// ── Workshop repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkshopRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbWorkshopRepository {
    type Record = Workshop;

    async fn find_by_id(&self, id: WorkshopId) -> Result<Option<Workshop>, RegistryError> {
        let model = workshops::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find workshop by id")?;
        Ok(model.map(workshop_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Workshop>, RegistryError> {
        let models = workshops::Entity::find()
            .order_by_asc(workshops::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list workshops")?;
        Ok(models.into_iter().map(workshop_from_model).collect())
    }

    async fn create(&self, workshop: &Workshop) -> Result<(), RegistryError> {
        workshop_active_model(workshop)
            .insert(&self.db)
            .await
            .context("create workshop")?;
        Ok(())
    }

    async fn update(&self, workshop: &Workshop) -> Result<bool, RegistryError> {
        replace_row(&self.db, workshop.id.0, "workshop", workshop_active_model(workshop)).await
    }

    async fn delete(&self, id: WorkshopId) -> Result<bool, RegistryError> {
        let result = workshops::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete workshop")?;
        Ok(result.rows_affected > 0)
    }
}

fn workshop_from_model(model: workshops::Model) -> Workshop {
    Workshop {
        id: WorkshopId(model.id),
        name: model.name,
        street: model.street,
        city: model.city,
        postal_code: model.postal_code,
        tax_id: model.tax_id,
        statistical_id: model.statistical_id,
        phone: model.phone,
        email: model.email,
        contact_person: model.contact_person,
    }
}

fn workshop_active_model(workshop: &Workshop) -> workshops::ActiveModel {
    workshops::ActiveModel {
        id: Set(workshop.id.0),
        name: Set(workshop.name.clone()),
        street: Set(workshop.street.clone()),
        city: Set(workshop.city.clone()),
        postal_code: Set(workshop.postal_code.clone()),
        tax_id: Set(workshop.tax_id.clone()),
        statistical_id: Set(workshop.statistical_id.clone()),
        phone: Set(workshop.phone.clone()),
        email: Set(workshop.email.clone()),
        contact_person: Set(workshop.contact_person.clone()),
    }
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbEmployeeRepository {
    type Record = Employee;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RegistryError> {
        let model = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find employee by id")?;
        model.map(employee_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, RegistryError> {
        let models = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list employees")?;
        models.into_iter().map(employee_from_model).collect()
    }

    async fn create(&self, employee: &Employee) -> Result<(), RegistryError> {
        employee_active_model(employee)
            .insert(&self.db)
            .await
            .context("create employee")?;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<bool, RegistryError> {
        replace_row(&self.db, employee.id.0, "employee", employee_active_model(employee)).await
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, RegistryError> {
        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete employee")?;
        Ok(result.rows_affected > 0)
    }
}

fn employee_from_model(model: employees::Model) -> Result<Employee, RegistryError> {
    let cost_center =
        CostCenter::try_from(model.cost_center).context("stored cost center value")?;
    Ok(Employee {
        id: EmployeeId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        job_title: model.job_title,
        department: model.department,
        plate_number: model.plate_number,
        cost_center,
    })
}

fn employee_active_model(employee: &Employee) -> employees::ActiveModel {
    employees::ActiveModel {
        id: Set(employee.id.0),
        first_name: Set(employee.first_name.clone()),
        last_name: Set(employee.last_name.clone()),
        job_title: Set(employee.job_title.clone()),
        department: Set(employee.department.clone()),
        plate_number: Set(employee.plate_number.clone()),
        cost_center: Set(employee.cost_center.code()),
    }
}

// ── Tire set repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTireSetRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbTireSetRepository {
    type Record = TireSet;

    async fn find_by_id(&self, id: TireSetId) -> Result<Option<TireSet>, RegistryError> {
        let model = tire_sets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find tire set by id")?;
        model.map(tire_set_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<TireSet>, RegistryError> {
        let models = tire_sets::Entity::find()
            .order_by_asc(tire_sets::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list tire sets")?;
        models.into_iter().map(tire_set_from_model).collect()
    }

    async fn create(&self, tires: &TireSet) -> Result<(), RegistryError> {
        tire_set_active_model(tires)
            .insert(&self.db)
            .await
            .context("create tire set")?;
        Ok(())
    }

    async fn update(&self, tires: &TireSet) -> Result<bool, RegistryError> {
        replace_row(&self.db, tires.id.0, "tire set", tire_set_active_model(tires)).await
    }

    async fn delete(&self, id: TireSetId) -> Result<bool, RegistryError> {
        let result = tire_sets::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete tire set")?;
        Ok(result.rows_affected > 0)
    }
}

fn tire_set_from_model(model: tire_sets::Model) -> Result<TireSet, RegistryError> {
    Ok(TireSet {
        id: TireSetId(model.id),
        plate_number: model.plate_number,
        category: stored("tire category", &model.category)?,
        size: model.size,
        wheels: WheelConditions {
            front_left: stored("tire condition", &model.front_left)?,
            rear_left: stored("tire condition", &model.rear_left)?,
            front_right: stored("tire condition", &model.front_right)?,
            rear_right: stored("tire condition", &model.rear_right)?,
        },
        remarks: model.remarks,
    })
}

fn tire_set_active_model(tires: &TireSet) -> tire_sets::ActiveModel {
    tire_sets::ActiveModel {
        id: Set(tires.id.0),
        plate_number: Set(tires.plate_number.clone()),
        category: Set(tires.category.value().to_owned()),
        size: Set(tires.size.clone()),
        front_left: Set(tires.wheels.front_left.value().to_owned()),
        rear_left: Set(tires.wheels.rear_left.value().to_owned()),
        front_right: Set(tires.wheels.front_right.value().to_owned()),
        rear_right: Set(tires.wheels.rear_right.value().to_owned()),
        remarks: Set(tires.remarks.clone()),
    }
}
