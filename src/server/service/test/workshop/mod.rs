use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, workshop::WorkshopError, AppError},
    model::{
        auth::AuthUser,
        workshop::{ProposeWorkshopParam, RescheduleWorkshopParam, WorkshopStatus},
    },
    service::workshop::WorkshopService,
};

mod propose;
mod scenario;

fn coordinator(id: i32) -> AuthUser {
    AuthUser::new(id, format!("coordinator{}", id), ["coordinator"])
}

fn instructor(id: i32) -> AuthUser {
    AuthUser::new(id, format!("instructor{}", id), ["instructor"])
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn proposal(workshop_type_id: i32, date: &str) -> ProposeWorkshopParam {
    ProposeWorkshopParam {
        workshop_type_id: Some(workshop_type_id),
        date: Some(date.to_string()),
        tnc_accepted: true,
    }
}
