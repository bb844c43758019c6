// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use exposed_model::BaseEntity;

#[derive(BaseEntity)]
pub struct Note {
    pub title: String,
}

fn main() {}
