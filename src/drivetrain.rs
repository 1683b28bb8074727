//! Mechanical drivetrain elements between the motor shaft and the load.
//!
//! A drivetrain is a coupler, a gear stage and an output stage. The output
//! stage converts linear travel into shaft revolutions (`pitch`, rev/m) and
//! force into torque (`lead`, m/rev).

use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result, ScrewGeometryFault};

fn check_inertia(j: f64) -> Result<f64> {
    if j >= 0.0 {
        Ok(j)
    } else {
        Err(Error::Config(ConfigError::NegativeInertia(j)))
    }
}

/// Rigid pass-through coupling; the load is driven in revolutions directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Direct {
    j: f64,
}

impl Direct {
    /// Create a direct coupling with moment of inertia `j` (kg*m^2).
    pub fn new(j: f64) -> Result<Self> {
        Ok(Self { j: check_inertia(j)? })
    }

    /// Moment of inertia in kg*m^2.
    pub fn j(&self) -> f64 {
        self.j
    }
}

/// Flexible shaft coupler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coupler {
    j: f64,
    d_in: Option<f64>,
    d_out: Option<f64>,
}

impl Coupler {
    /// Create a coupler with moment of inertia `j` (kg*m^2).
    pub fn new(j: f64) -> Result<Self> {
        Ok(Self {
            j: check_inertia(j)?,
            d_in: None,
            d_out: None,
        })
    }

    /// Record bore diameters in m. Informational only.
    pub fn with_bores(mut self, d_in: Option<f64>, d_out: Option<f64>) -> Result<Self> {
        for d in [d_in, d_out].into_iter().flatten() {
            if !(d > 0.0) {
                return Err(Error::Config(ConfigError::InvalidDiameter(d)));
            }
        }
        self.d_in = d_in;
        self.d_out = d_out;
        Ok(self)
    }

    /// Moment of inertia in kg*m^2.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Input bore diameter in m.
    pub fn d_in(&self) -> Option<f64> {
        self.d_in
    }

    /// Output bore diameter in m.
    pub fn d_out(&self) -> Option<f64> {
        self.d_out
    }
}

/// Wheel, pulley or pinion rolling along the load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wheel {
    diameter: f64,
    j: f64,
}

impl Wheel {
    /// Create a wheel of `diameter` (m) with moment of inertia `j` (kg*m^2).
    pub fn new(diameter: f64, j: f64) -> Result<Self> {
        if !(diameter > 0.0) {
            return Err(Error::Config(ConfigError::InvalidDiameter(diameter)));
        }
        Ok(Self {
            diameter,
            j: check_inertia(j)?,
        })
    }

    /// Moment of inertia in kg*m^2.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Diameter in m.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Rotations per meter of travel: `1 / (π * diameter)`.
    pub fn pitch(&self) -> f64 {
        1.0 / (PI * self.diameter)
    }

    /// Travel per rotation in m (the circumference).
    pub fn lead(&self) -> f64 {
        PI * self.diameter
    }
}

/// Lead screw or ball screw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Screw {
    pitch: f64,
    lead: f64,
    j: f64,
}

impl Screw {
    /// Create a screw from exactly one of `pitch` (rev/m) or `lead` (m/rev).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ScrewGeometry` when both or neither are given, or
    /// the given one is not positive.
    pub fn new(pitch: Option<f64>, lead: Option<f64>, j: f64) -> Result<Self> {
        let (pitch, lead) = match (pitch, lead) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(ConfigError::ScrewGeometry(ScrewGeometryFault::Both)))
            }
            (None, None) => {
                return Err(Error::Config(ConfigError::ScrewGeometry(
                    ScrewGeometryFault::Neither,
                )))
            }
            (Some(pitch), None) => (pitch, 1.0 / pitch),
            (None, Some(lead)) => (1.0 / lead, lead),
        };
        if !(pitch > 0.0 && lead > 0.0 && pitch.is_finite() && lead.is_finite()) {
            return Err(Error::Config(ConfigError::ScrewGeometry(
                ScrewGeometryFault::NonPositive,
            )));
        }
        Ok(Self {
            pitch,
            lead,
            j: check_inertia(j)?,
        })
    }

    /// Screw from its pitch in rev/m.
    pub fn from_pitch(pitch: f64, j: f64) -> Result<Self> {
        Self::new(Some(pitch), None, j)
    }

    /// Screw from its lead in m/rev.
    pub fn from_lead(lead: f64, j: f64) -> Result<Self> {
        Self::new(None, Some(lead), j)
    }

    /// Moment of inertia in kg*m^2.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Revolutions per meter.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Meters per revolution.
    pub fn lead(&self) -> f64 {
        self.lead
    }
}

/// Speed-reducing gear stage.
///
/// `ratio` is input speed over output speed. Output-side quantities are
/// reflected to the input by `1 / ratio^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gear {
    ratio: f64,
    j_in: f64,
    j_out: f64,
}

impl Default for Gear {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            j_in: 0.0,
            j_out: 0.0,
        }
    }
}

impl Gear {
    /// Create a gear stage with input- and output-side inertias (kg*m^2).
    pub fn new(ratio: f64, j_in: f64, j_out: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(Error::Config(ConfigError::InvalidGearRatio(ratio)));
        }
        Ok(Self {
            ratio,
            j_in: check_inertia(j_in)?,
            j_out: check_inertia(j_out)?,
        })
    }

    /// Input speed over output speed.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Input-side moment of inertia in kg*m^2.
    pub fn j_in(&self) -> f64 {
        self.j_in
    }

    /// Output-side moment of inertia in kg*m^2.
    pub fn j_out(&self) -> f64 {
        self.j_out
    }
}

/// Kind tag of a drivetrain element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// [`Direct`]
    Direct,
    /// [`Coupler`]
    Coupler,
    /// [`Wheel`]
    Wheel,
    /// [`Screw`]
    Screw,
    /// [`Gear`]
    Gear,
}

impl ElementKind {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Direct => "direct",
            ElementKind::Coupler => "coupler",
            ElementKind::Wheel => "wheel",
            ElementKind::Screw => "screw",
            ElementKind::Gear => "gear",
        }
    }
}

/// Any drivetrain element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DrivetrainElement {
    /// Rigid pass-through.
    Direct(Direct),
    /// Flexible coupler.
    Coupler(Coupler),
    /// Wheel or pulley.
    Wheel(Wheel),
    /// Lead screw.
    Screw(Screw),
    /// Gear stage.
    Gear(Gear),
}

impl DrivetrainElement {
    /// Kind tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            DrivetrainElement::Direct(_) => ElementKind::Direct,
            DrivetrainElement::Coupler(_) => ElementKind::Coupler,
            DrivetrainElement::Wheel(_) => ElementKind::Wheel,
            DrivetrainElement::Screw(_) => ElementKind::Screw,
            DrivetrainElement::Gear(_) => ElementKind::Gear,
        }
    }

    /// Moment of inertia in kg*m^2. For a gear, input plus output side.
    pub fn j(&self) -> f64 {
        match self {
            DrivetrainElement::Direct(e) => e.j,
            DrivetrainElement::Coupler(e) => e.j,
            DrivetrainElement::Wheel(e) => e.j,
            DrivetrainElement::Screw(e) => e.j,
            DrivetrainElement::Gear(e) => e.j_in + e.j_out,
        }
    }

    /// Revolutions per meter of load travel, for output stages.
    ///
    /// A direct output stage treats one profile unit as one revolution.
    pub fn pitch(&self) -> Option<f64> {
        match self {
            DrivetrainElement::Direct(_) => Some(1.0),
            DrivetrainElement::Wheel(e) => Some(e.pitch()),
            DrivetrainElement::Screw(e) => Some(e.pitch()),
            DrivetrainElement::Coupler(_) | DrivetrainElement::Gear(_) => None,
        }
    }

    /// Meters of load travel per revolution, for output stages.
    pub fn lead(&self) -> Option<f64> {
        match self {
            DrivetrainElement::Direct(_) => Some(1.0),
            DrivetrainElement::Wheel(e) => Some(e.lead()),
            DrivetrainElement::Screw(e) => Some(e.lead()),
            DrivetrainElement::Coupler(_) | DrivetrainElement::Gear(_) => None,
        }
    }
}

impl From<Direct> for DrivetrainElement {
    fn from(e: Direct) -> Self {
        DrivetrainElement::Direct(e)
    }
}

impl From<Coupler> for DrivetrainElement {
    fn from(e: Coupler) -> Self {
        DrivetrainElement::Coupler(e)
    }
}

impl From<Wheel> for DrivetrainElement {
    fn from(e: Wheel) -> Self {
        DrivetrainElement::Wheel(e)
    }
}

impl From<Screw> for DrivetrainElement {
    fn from(e: Screw) -> Self {
        DrivetrainElement::Screw(e)
    }
}

impl From<Gear> for DrivetrainElement {
    fn from(e: Gear) -> Self {
        DrivetrainElement::Gear(e)
    }
}

/// Coupler, gear and output stage between the motor and the load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drivetrain {
    coupler: Coupler,
    gear: Gear,
    output: DrivetrainElement,
    pitch: f64,
    lead: f64,
}

impl Drivetrain {
    /// Assemble a drivetrain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotAFinalStage` if `output` cannot convert travel
    /// into rotation (a coupler or a gear).
    pub fn new(coupler: Coupler, gear: Gear, output: impl Into<DrivetrainElement>) -> Result<Self> {
        let output = output.into();
        let (Some(pitch), Some(lead)) = (output.pitch(), output.lead()) else {
            return Err(Error::Config(ConfigError::NotAFinalStage(output.kind().as_str())));
        };
        Ok(Self {
            coupler,
            gear,
            output,
            pitch,
            lead,
        })
    }

    /// Output stage driving the load directly from the motor shaft.
    pub fn direct(output: impl Into<DrivetrainElement>) -> Result<Self> {
        Self::new(Coupler::default(), Gear::default(), output)
    }

    /// Coupler.
    pub fn coupler(&self) -> &Coupler {
        &self.coupler
    }

    /// Gear stage.
    pub fn gear(&self) -> &Gear {
        &self.gear
    }

    /// Output stage.
    pub fn output(&self) -> &DrivetrainElement {
        &self.output
    }

    /// Output stage revolutions per meter.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Output stage meters per revolution.
    pub fn lead(&self) -> f64 {
        self.lead
    }

    /// Motor revolutions per meter of load travel, through the gear.
    pub fn revs_per_meter(&self) -> f64 {
        self.pitch * self.gear.ratio
    }
}
