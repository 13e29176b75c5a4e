use absolute_sensor::{
    EstimatorSettings, OrientationEstimator, ReferenceFrame, RotationVector, SensorType,
};

fn main() {
    let estimator = OrientationEstimator::new();
    let absolute = OrientationEstimator::with_settings(EstimatorSettings {
        reference_frame: ReferenceFrame::MagneticNorthZVertical,
    });

    for step in 0..10 {
        // this loop should repeat each time a rotation-vector sample arrives
        let heading = (step as f64 * 10.0).to_radians();
        let payload = [0.0, 0.0, (heading / 2.0).sin(), (heading / 2.0).cos()]; // replace with sensor values

        let rotation_vector = match RotationVector::from_slice(&payload) {
            Ok(rotation_vector) => rotation_vector,
            Err(err) => {
                eprintln!("dropping sample: {err}");
                continue;
            }
        };
        let sample = estimator.estimate_from_rotation_vector(&rotation_vector).to_degrees();

        println!(
            "{}: Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            estimator.sensor_type().channel(),
            sample.roll,
            sample.pitch,
            sample.yaw
        );

        // Device-motion attitude (e.g. from a platform attitude object)
        let sample = absolute.estimate_from_attitude(0.0, 0.0, heading).to_degrees();
        println!(
            "{}: Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            SensorType::AbsoluteOrientation.channel(),
            sample.roll,
            sample.pitch,
            sample.yaw
        );
    }
}
