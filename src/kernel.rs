use crate::prelude_crate::*;

/// $$ f\_{i}^{\text{eq}} = w\_{i}\rho\left[1+\frac{\mathbf{u}\cdot\mathbf{c}\_{i}}{c\_{s}^{2}}+\frac{\left(\mathbf{u}\cdot\mathbf{c}\_{i}\right)^{2}}{2 c\_{s}^{4}}-\frac{\mathbf{u}\cdot\mathbf{u}}{2 c\_{s}^{2}}\right] $$
///
/// # Examples
/// ```
/// # use lbfoil::kernel::equilibrium;
/// # use lbfoil::flow::NodeProperties;
/// let properties = NodeProperties::new(0.9, 0.0, 0.0);
///
/// assert!((equilibrium(0, &properties, [0.0, 0.0]) - 0.4).abs() < 1e-12);
/// assert!((equilibrium(1, &properties, [0.0, 1.0]) - 0.1).abs() < 1e-12);
/// assert!((equilibrium(2, &properties, [1.0, 1.0]) - 0.025).abs() < 1e-12);
/// ```
///
/// # Panics
///
/// Panics if `direction >= Q`.
pub fn equilibrium(direction: usize, properties: &NodeProperties, c_i: [Float; D]) -> Float {
    let w = velocity_set::get_w()[direction];
    let u_dot_c = properties.ux * c_i[0] + properties.uy * c_i[1];
    let u_dot_u = properties.ux * properties.ux + properties.uy * properties.uy;
    properties.rho
        * w
        * (1.0 + u_dot_c * CS_2_INV + 0.5 * u_dot_c * u_dot_c * CS_4_INV - 0.5 * u_dot_u * CS_2_INV)
}

pub fn equilibrium_distribution(properties: &NodeProperties) -> [Float; Q] {
    let c = velocity_set::get_c();
    let mut f_eq = [0.0; Q];
    (0..Q).for_each(|i| {
        f_eq[i] = equilibrium(i, properties, [c[i][0] as Float, c[i][1] as Float]);
    });
    f_eq
}

/// Relaxes `f` toward the local equilibrium in place: `f + omega * (f_eq - f)`.
pub(crate) fn bgk_collision(f: &mut [Real], properties: &NodeProperties, omega: Float) {
    let f_eq = equilibrium_distribution(properties);
    f.iter_mut().zip(f_eq.iter()).for_each(|(f_i, f_eq_i)| {
        let value = *f_i as Float;
        *f_i = (value + omega * (f_eq_i - value)) as Real;
    });
}

/// Swaps every moving population with its opposite; the rest population is kept.
pub(crate) fn bounce_back(f: &mut [Real]) {
    (1..=Q / 2).for_each(|i| {
        f.swap(i, velocity_set::get_opposite_direction(i));
    });
}
