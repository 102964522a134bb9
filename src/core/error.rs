// Copyright (C) 2025 Temporal Action Detection Framework Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FrameworkError {
    InvalidArgumentType(String),
    MissingRequiredField(String),
    NotFound(String),
    DuplicateRegistration(String),
    Validation(String),
    LockError,
    IOError(String),
    SerializationError(String),
}

impl Error for FrameworkError {}

impl fmt::Display for FrameworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrameworkError::InvalidArgumentType(msg) => {
                write!(f, "Invalid argument type: {}", msg)
            }
            FrameworkError::MissingRequiredField(msg) => {
                write!(f, "Missing required field: {}", msg)
            }
            FrameworkError::NotFound(msg) => write!(f, "Not found: {}", msg),
            FrameworkError::DuplicateRegistration(msg) => {
                write!(f, "Duplicate registration: {}", msg)
            }
            FrameworkError::Validation(msg) => write!(f, "Validation error: {}", msg),
            FrameworkError::LockError => write!(f, "Lock error"),
            FrameworkError::IOError(err) => write!(f, "IO error: {}", err),
            FrameworkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}
