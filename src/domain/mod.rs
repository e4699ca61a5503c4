//! Domain Layer
//!
//! The sync core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Mirror invocation, command script, mirror outcome
//! - `value_objects/` - Direction, webhook phase, mirror options
//! - `services/` - Flag builder, output classifier, masking
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
