//! Sensor record and partial update types
//!
//! A [`SensorRecord`] is the decoded form of one 64-byte slot. A
//! [`SensorUpdate`] names only the fields a caller wants to change; every
//! `None` field keeps whatever value the slot already holds.

use serde::{Deserialize, Serialize};

use crate::layout::PADDING_SIZE;

/// One decoded sensor slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Direction encoding, six components
    pub direction_params: [f32; 6],
    /// Sensor radius
    pub radius: f32,
    /// Adjacency indices into the sensor array
    pub next_sensor: [u8; 6],
    /// Scene index
    pub scene_index: u8,
    /// Absorption level
    pub absorption_level: u8,
    /// Boundary adjacency indices
    pub next_boundary_sensor: [u8; 2],
    /// Reserved trailing bytes of the slot, carried verbatim
    pub padding: Vec<u8>,
}

impl Default for SensorRecord {
    /// A fresh record: all fields zero, zero-filled padding.
    fn default() -> Self {
        Self {
            direction_params: [0.0; 6],
            radius: 0.0,
            next_sensor: [0; 6],
            scene_index: 0,
            absorption_level: 0,
            next_boundary_sensor: [0; 2],
            padding: vec![0; PADDING_SIZE],
        }
    }
}

impl SensorRecord {
    /// Whether every structured field is zero (padding is not inspected).
    pub fn fields_are_zero(&self) -> bool {
        self.direction_params.iter().all(|v| *v == 0.0)
            && self.radius == 0.0
            && self.next_sensor.iter().all(|v| *v == 0)
            && self.scene_index == 0
            && self.absorption_level == 0
            && self.next_boundary_sensor.iter().all(|v| *v == 0)
    }
}

/// Partial update of a sensor slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorUpdate {
    /// New direction parameters
    pub direction_params: Option<[f32; 6]>,
    /// New radius
    pub radius: Option<f32>,
    /// New adjacency indices
    pub next_sensor: Option<[u8; 6]>,
    /// New scene index
    pub scene_index: Option<u8>,
    /// New absorption level
    pub absorption_level: Option<u8>,
    /// New boundary adjacency indices
    pub next_boundary_sensor: Option<[u8; 2]>,
    /// Replacement padding bytes
    pub padding: Option<Vec<u8>>,
}

impl SensorUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Update carrying every editable field of `record`.
    ///
    /// Padding is left out so the on-disk bytes survive a merge.
    pub fn from_record(record: &SensorRecord) -> Self {
        Self {
            direction_params: Some(record.direction_params),
            radius: Some(record.radius),
            next_sensor: Some(record.next_sensor),
            scene_index: Some(record.scene_index),
            absorption_level: Some(record.absorption_level),
            next_boundary_sensor: Some(record.next_boundary_sensor),
            padding: None,
        }
    }

    /// Set direction parameters
    pub fn with_direction_params(mut self, params: [f32; 6]) -> Self {
        self.direction_params = Some(params);
        self
    }

    /// Set radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set adjacency indices
    pub fn with_next_sensor(mut self, next: [u8; 6]) -> Self {
        self.next_sensor = Some(next);
        self
    }

    /// Set scene index
    pub fn with_scene_index(mut self, scene_index: u8) -> Self {
        self.scene_index = Some(scene_index);
        self
    }

    /// Set absorption level
    pub fn with_absorption_level(mut self, level: u8) -> Self {
        self.absorption_level = Some(level);
        self
    }

    /// Set boundary adjacency indices
    pub fn with_next_boundary_sensor(mut self, next: [u8; 2]) -> Self {
        self.next_boundary_sensor = Some(next);
        self
    }

    /// Replace the padding bytes
    pub fn with_padding(mut self, padding: Vec<u8>) -> Self {
        self.padding = Some(padding);
        self
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.direction_params.is_none()
            && self.radius.is_none()
            && self.next_sensor.is_none()
            && self.scene_index.is_none()
            && self.absorption_level.is_none()
            && self.next_boundary_sensor.is_none()
            && self.padding.is_none()
    }

    /// Layer `newer` on top of `self`; fields present in `newer` win.
    pub fn overlay(self, newer: SensorUpdate) -> SensorUpdate {
        SensorUpdate {
            direction_params: newer.direction_params.or(self.direction_params),
            radius: newer.radius.or(self.radius),
            next_sensor: newer.next_sensor.or(self.next_sensor),
            scene_index: newer.scene_index.or(self.scene_index),
            absorption_level: newer.absorption_level.or(self.absorption_level),
            next_boundary_sensor: newer.next_boundary_sensor.or(self.next_boundary_sensor),
            padding: newer.padding.or(self.padding),
        }
    }
}

impl From<&SensorRecord> for SensorUpdate {
    fn from(record: &SensorRecord) -> Self {
        SensorUpdate::from_record(record)
    }
}
