//! Wire shape of serialized samples
//!
//! Requires the `serde` feature: `cargo test --features serde`.
#![cfg(feature = "serde")]

use absolute_sensor::{MotionVector, OrientationSample, ReferenceFrame, attitude_to_orientation};
use std::error::Error;

#[test]
fn test_orientation_sample_fields() -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(OrientationSample::new(0.5, -0.25, 1.0))?;
    let output = String::from_utf8(writer.into_inner()?)?;

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("roll,pitch,yaw"));
    assert_eq!(lines.next(), Some("0.5,-0.25,1.0"));

    Ok(())
}

#[test]
fn test_motion_vector_fields() -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(MotionVector::new(0.0, 9.81, -0.5))?;
    let output = String::from_utf8(writer.into_inner()?)?;

    assert!(output.starts_with("x,y,z\n"));

    Ok(())
}

#[test]
fn test_samples_read_back() -> Result<(), Box<dyn Error>> {
    let samples = [
        attitude_to_orientation(0.1, 0.2, 0.0, ReferenceFrame::MagneticNorthZVertical),
        attitude_to_orientation(-0.3, 0.4, 2.0, ReferenceFrame::ArbitraryZVertical),
    ];

    let mut writer = csv::Writer::from_writer(Vec::new());
    for sample in &samples {
        writer.serialize(sample)?;
    }
    let data = writer.into_inner()?;

    let mut reader = csv::Reader::from_reader(data.as_slice());
    let decoded: Vec<OrientationSample> = reader.deserialize().collect::<Result<_, _>>()?;
    assert_eq!(decoded.len(), samples.len());
    for (decoded, original) in decoded.iter().zip(&samples) {
        assert!((decoded.yaw - original.yaw).abs() < 1e-12);
        assert_eq!(decoded.roll, original.roll);
    }

    Ok(())
}
