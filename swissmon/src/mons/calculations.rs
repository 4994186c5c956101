use swissmon_data::{
    Nature,
    Stat,
    StatTable,
};

/// Calculates a single stat at the given level, before any nature is applied.
///
/// The same formula is used for every stat, including HP.
pub fn calculate_stat(base: u16, level: u8) -> u16 {
    let base = base as u32;
    let level = level as u32;
    let value = 2 * base * level / 100 + level + 10;
    value.min(u16::MAX as u32) as u16
}

/// Calculates a creature's actual stats from its species' base stats.
pub fn calculate_stats(base_stats: &StatTable, level: u8, nature: Nature) -> StatTable {
    let stats = base_stats
        .entries()
        .map(|(stat, base)| (stat, calculate_stat(base, level)))
        .collect::<StatTable>();
    apply_nature_to_stats(stats, nature)
}

/// Applies the given nature to the stat table, returning the new stat table.
///
/// HP is left untouched. Every other stat is scaled and truncated.
pub fn apply_nature_to_stats(mut stats: StatTable, nature: Nature) -> StatTable {
    for stat in [Stat::Atk, Stat::Def, Stat::Spe] {
        let value = (stats.get(stat) as f64 * nature.modifier(stat)).floor();
        stats.set(stat, value.min(u16::MAX as f64) as u16);
    }
    stats
}

/// Experience required to advance from the given level to the next one.
pub fn exp_to_next_level(level: u8) -> u32 {
    (level as u32).pow(3)
}
