//! Sensor package generation from athlete profiles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use workouts::{SensorPackage, WorkoutKind};

use crate::config::{ConfigError, GenerationConfig};
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, actions_for, sample_variance,
};

/// Generates sensor packages, one athlete profile per workout type.
pub struct PackageGenerator {
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGenerator {
    /// Creates a generator with default profiles.
    pub fn new() -> Self {
        Self {
            runner: RunnerProfile::default(),
            walker: WalkerProfile::default(),
            swimmer: SwimmerProfile::default(),
        }
    }

    pub fn with_runner(mut self, runner: RunnerProfile) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_walker(mut self, walker: WalkerProfile) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_swimmer(mut self, swimmer: SwimmerProfile) -> Self {
        self.swimmer = swimmer;
        self
    }

    fn profile(&self, kind: WorkoutKind) -> &dyn AthleteProfile {
        match kind {
            WorkoutKind::Running => &self.runner,
            WorkoutKind::SportsWalking => &self.walker,
            WorkoutKind::Swimming => &self.swimmer,
        }
    }

    /// Generates packages as configured, seeding the RNG from the config if set.
    pub fn generate(&self, config: &GenerationConfig) -> Result<Vec<SensorPackage>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(config, &mut rng)
    }

    /// Generates packages using the given RNG.
    pub fn generate_with(
        &self,
        config: &GenerationConfig,
        rng: &mut impl Rng,
    ) -> Result<Vec<SensorPackage>, ConfigError> {
        config.validate()?;

        let (min, max) = config.duration_h;
        let mut packages = Vec::with_capacity(config.package_count);

        for _ in 0..config.package_count {
            let kind = *config.mix.choose(rng).ok_or(ConfigError::EmptyMix)?;
            let duration_h = rng.gen_range(min..=max);
            packages.push(self.package(kind, duration_h, rng));
        }

        info!("Generated {} sensor packages", packages.len());

        Ok(packages)
    }

    /// Generates a single package for a workout of the given length.
    pub fn package(
        &self,
        kind: WorkoutKind,
        duration_h: f64,
        rng: &mut impl Rng,
    ) -> SensorPackage {
        let profile = self.profile(kind);
        let factor = sample_variance(profile, rng);

        let mut data = vec![
            actions_for(profile, duration_h, factor),
            duration_h,
            profile.weight_kg(),
        ];
        data.extend(profile.extra_readings(duration_h, factor));

        debug!(workout = %kind, duration_h, factor, "Generated sensor package");

        SensorPackage::new(kind.code(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_arity_matches_kind() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        for kind in WorkoutKind::ALL {
            let package = generator.package(kind, 1.0, &mut rng);
            assert_eq!(package.workout_type, kind.code());
            assert_eq!(package.data.len(), kind.arity());
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = GenerationConfig {
            package_count: 25,
            seed: Some(12345),
            ..Default::default()
        };
        let generator = PackageGenerator::new();
        assert_eq!(
            generator.generate(&config).unwrap(),
            generator.generate(&config).unwrap()
        );
    }

    #[test]
    fn test_respects_mix_and_duration() {
        let config = GenerationConfig {
            package_count: 50,
            duration_h: (0.5, 0.75),
            mix: vec![WorkoutKind::Swimming],
            seed: Some(9),
        };
        let packages = PackageGenerator::new().generate(&config).unwrap();
        assert_eq!(packages.len(), 50);
        for package in packages {
            assert_eq!(package.workout_type, "SWM");
            assert!((0.5..=0.75).contains(&package.data[1]));
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = GenerationConfig {
            mix: vec![],
            ..Default::default()
        };
        assert_eq!(
            PackageGenerator::new().generate(&config),
            Err(ConfigError::EmptyMix)
        );
    }

    #[test]
    fn test_custom_profile() {
        let generator = PackageGenerator::new().with_walker(WalkerProfile::with_height(190.0));
        let mut rng = StdRng::seed_from_u64(0);
        let package = generator.package(WorkoutKind::SportsWalking, 1.0, &mut rng);
        assert_eq!(package.data[3], 190.0);
    }
}
