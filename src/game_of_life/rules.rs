//! Conway's B3/S23 transition rule

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Counting may stop at this many neighbors; every count from here up means death.
    pub const SATURATION: u8 = 4;

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (_, 3))
    }

    /// Get neighbor counts that would result in birth (dead -> alive)
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &[3]
    }

    /// Get neighbor counts that would result in survival (alive -> alive)
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &[2, 3]
    }

    /// Get the maximum possible neighbor count for any cell
    pub fn max_neighbor_count() -> u8 {
        8 // Moore neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 2)); // No birth with 2 neighbors
    }

    #[test]
    fn test_saturated_count_is_always_dead() {
        assert!(!GameOfLifeRules::should_be_alive(true, GameOfLifeRules::SATURATION));
        assert!(!GameOfLifeRules::should_be_alive(false, GameOfLifeRules::SATURATION));
    }

    #[test]
    fn test_neighbor_count_sets() {
        assert_eq!(GameOfLifeRules::max_neighbor_count(), 8);
        assert_eq!(GameOfLifeRules::birth_neighbor_counts(), &[3]);
        assert_eq!(GameOfLifeRules::survival_neighbor_counts(), &[2, 3]);

        for count in 0..=GameOfLifeRules::max_neighbor_count() {
            assert_eq!(
                GameOfLifeRules::should_be_alive(false, count),
                GameOfLifeRules::birth_neighbor_counts().contains(&count)
            );
            assert_eq!(
                GameOfLifeRules::should_be_alive(true, count),
                GameOfLifeRules::survival_neighbor_counts().contains(&count)
            );
        }
    }
}
