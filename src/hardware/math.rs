
///
/// Converts cartesian into cord lengths. The cord lengths are measured from the anchor points,
/// the left anchor sitting at (0, 0) and the right anchor at (`machine_width`, 0). All values are
/// in millimetres.
///
/// # Parameters:
/// - `x`: The x parameter of the cartesian coordinate, horizontally relative to the left anchor
/// - `y`: The y parameter of the cartesian coordinate, vertically relative to the left anchor
/// - `machine_width`: The distance between the two anchors
///
/// # Returns:
/// - A tuple containing the left and right cord lengths, respectively
///
pub fn cartesian_to_cords(x: f64, y: f64, machine_width: f64) -> (f64, f64) {
    let left_cord = f64::sqrt(f64::powi(x, 2) + f64::powi(y, 2));
    let right_cord = f64::sqrt(f64::powi(machine_width - x, 2) + f64::powi(y, 2));

    (left_cord, right_cord)
}

///
/// Converts cord lengths into cartesian coordinates. The calculated cartesian coordinates are
/// relative to the left anchor (0, 0), and grow downwards/rightwards. All values are in
/// millimetres.
///
/// The two cords must span the anchors, `left_length + right_length > machine_width`, and
/// neither may be longer than the other plus the anchor span. Otherwise there is no triangle
/// and `None` is returned.
///
/// # Parameters:
/// - `left_length`: The length of the left cord, from the left anchor
/// - `right_length`: The length of the right cord, from the right anchor
/// - `machine_width`: The distance between the two anchors
///
/// # Returns:
/// - A tuple containing the x and y coordinates, respectively
/// - `None` if the cords cannot reach each other, or either length is negative
///
pub fn cords_to_cartesian(left_length: f64, right_length: f64, machine_width: f64) -> Option<(f64, f64)> {
    if !(left_length + right_length > machine_width) || left_length < 0. || right_length < 0. {
        return None;
    }

    let x = (f64::powi(left_length, 2) - f64::powi(right_length, 2) + f64::powi(machine_width, 2)) / (2. * machine_width);
    let y_squared = f64::powi(left_length, 2) - f64::powi(x, 2);

    // one cord outreaching the other by more than the anchor span
    if !y_squared.is_finite() || y_squared < 0. {
        return None;
    }

    Some((x, y_squared.sqrt()))
}

///
/// Calculates the number of microsteps required to move a cord by a given length, rounded to
/// the nearest whole step.
///
/// # Parameters:
/// - `length`: The cord length, in millimetres
/// - `steps_size_mm`: The cord travel of a single microstep
///
/// # Returns:
/// - The number of microsteps
///
pub fn mm_to_steps(length: f64, steps_size_mm: f64) -> i64 {
    (length / steps_size_mm).round() as i64
}

///
/// Calculates the number of millimetres moved, provided a given amount of microsteps.
///
/// # Parameters:
/// - `steps`: The number of microsteps
/// - `steps_size_mm`: The cord travel of a single microstep
///
/// # Returns:
/// - The number of millimetres moved
///
pub fn steps_to_mm(steps: i64, steps_size_mm: f64) -> f64 {
    (steps as f64) * steps_size_mm
}
