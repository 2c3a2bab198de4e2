// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! plaincal - turn a plaintext event list into an iCalendar file

use std::process::ExitCode;

use plaincal_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
