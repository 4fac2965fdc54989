// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  copy_file_if_absent()  create_new + byte copy, never overwrites
//! ```

pub mod copy;
