// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

fn main() {
    if let Err(e) = exposed_model_gen::build::generate() {
        panic!("exposed-model-gen: {e}");
    }
}
