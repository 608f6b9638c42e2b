use rand::distributions::{Distribution, Standard};
use rand::Rng;

pub const SAMPLES: usize = 1000;

pub fn random_pairs<T>() -> Vec<(T, T)>
where
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    (0..SAMPLES).map(|_| (rng.gen(), rng.gen())).collect()
}
