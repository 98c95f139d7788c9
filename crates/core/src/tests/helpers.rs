// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lot_desk_audit::{Actor, Clock};
use lot_desk_domain::{DepositDetails, FuelType, SoldDetails, Transmission, VehicleAttributes};

/// A clock pinned to a fixed instant.
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.to_string()
    }
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("mgr-19"), String::from("Terry Voss"))
}

pub fn create_test_attributes() -> VehicleAttributes {
    VehicleAttributes {
        vin: String::from("1FTFW1ET1EFA00001"),
        stock_number: String::from("P4471"),
        location: String::from("Main Street"),
        year: String::from("2023"),
        make: String::from("Ford"),
        model: String::from("F-150"),
        trim: Some(String::from("XLT")),
        exterior_color: String::from("Black"),
        mileage: 1000,
        total_price: 45_000.0,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Gasoline,
        engine_size: Some(String::from("3.5L V6")),
        description: String::from("One owner, clean history"),
    }
}

pub fn create_test_deposit() -> DepositDetails {
    DepositDetails {
        location_sold: String::from("Main Street"),
        desk_manager: String::from("R. Alvarez"),
        deal_number: String::from("D-10442"),
        deposit_amount: 500.0,
    }
}

pub fn create_test_sold() -> SoldDetails {
    SoldDetails {
        location_sold: String::from("Main Street"),
        desk_manager: String::from("R. Alvarez"),
        sales_manager: String::from("K. Osei"),
        salesperson: String::from("J. Tran"),
        deal_number: String::from("D-10442"),
        sale_date: String::from("2026-02-14"),
    }
}
