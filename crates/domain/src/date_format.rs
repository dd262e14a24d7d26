// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serde formats for dates in persisted records.
//!
//! Use with `#[serde(with = "spa_center_domain::calendar_date")]`, or the
//! generated `option` submodule for optional fields.

time::serde::format_description!(pub calendar_date, Date, "[year]-[month]-[day]");

time::serde::format_description!(
    pub appointment,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

time::serde::format_description!(pub clock_time, Time, "[hour]:[minute]");
