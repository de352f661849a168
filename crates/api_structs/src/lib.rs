mod certificate;
mod compliance;
mod contract;
mod employee;
mod maintenance;
mod status;
mod task;
mod vehicle;

pub mod dtos {
    pub use crate::certificate::dtos::*;
    pub use crate::compliance::dtos::*;
    pub use crate::contract::dtos::*;
    pub use crate::employee::dtos::*;
    pub use crate::maintenance::dtos::*;
    pub use crate::task::dtos::*;
    pub use crate::vehicle::dtos::*;
}

pub use crate::certificate::api::*;
pub use crate::compliance::api::*;
pub use crate::contract::api::*;
pub use crate::employee::api::*;
pub use crate::maintenance::api::*;
pub use crate::status::api::*;
pub use crate::task::api::*;
pub use crate::vehicle::api::*;
