// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use exposed_model::BaseEntity;

#[derive(BaseEntity)]
pub enum Status {
    Active,
    Archived,
}

fn main() {}
