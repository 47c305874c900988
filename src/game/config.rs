/// Configuration for the game board
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of grid columns
    pub grid_width: usize,
    /// Number of grid rows
    pub grid_height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        // A 640x480 px board at 20px cells
        Self {
            grid_width: 32,
            grid_height: 24,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
    }
}
