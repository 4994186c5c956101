/// Calculates the damage of a move before type effectiveness and the random factor.
///
/// The level term uses real division, so a level 7 attacker contributes `2 * 7 / 5 + 2 = 4.8`.
pub fn base_damage(attacker_level: u8, power: u32, attack: u16, defense: u16) -> u32 {
    let level_factor = 2.0 * attacker_level as f64 / 5.0 + 2.0;
    let defense = defense.max(1) as f64;
    let damage = (level_factor * power as f64 * attack as f64 / defense) / 50.0;
    damage.floor() as u32 + 2
}

/// Applies type effectiveness and the random factor to the base damage.
///
/// An effectiveness of 0 always yields 0.
pub fn final_damage(base_damage: u32, effectiveness: f64, random_factor: f64) -> u32 {
    (base_damage as f64 * effectiveness * random_factor).floor() as u32
}

/// Damage of the flat strike used when no move can be used.
pub fn fallback_damage(attack: u16) -> u32 {
    (attack as f64 * 0.5).floor() as u32
}
