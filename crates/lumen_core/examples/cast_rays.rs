//! Builds a random sphere field and fires rays at it from many threads.
//!
//! Demonstrates the build-once / query-concurrently model: the hierarchy
//! is immutable after construction, each rayon worker owns its generator,
//! and a single-bounce estimate is accumulated per ray.
//!
//! Run with: cargo run --release --example cast_rays

use std::sync::Arc;

use lumen_core::{
    random_unit_vector, BvhTree, Color, Hittable, HittableList, Interval, Lambertian, Light,
    Material, Mirror, Ray, Sphere, Vec3, EPSILON,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

const SPHERES: usize = 512;
const RAYS: usize = 1_000_000;

fn build_scene() -> HittableList {
    let mut rng = StdRng::seed_from_u64(7);
    let matte: Arc<dyn Material> = Arc::new(Lambertian);
    let mirror: Arc<dyn Material> = Arc::new(Mirror);

    let mut scene = HittableList::new();
    for i in 0..SPHERES {
        let center = Vec3::new(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
        );
        let radius = rng.gen_range(0.5..2.5);
        let light = (i % 8 == 0).then(|| {
            Arc::new(Light::new(
                Color::new(rng.gen(), rng.gen(), rng.gen()),
                rng.gen_range(1.0..10.0),
            ))
        });
        let material = if i % 3 == 0 { &mirror } else { &matte };
        scene.add(Arc::new(Sphere::new(
            center,
            radius,
            light,
            Arc::clone(material),
        )));
    }
    scene
}

/// Reflect `v` about the unit normal `n`.
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

fn main() {
    env_logger::init();

    let scene = build_scene();
    let tree = BvhTree::new(scene.objects()).expect("scene is non-empty");
    let interval = Interval::new(EPSILON, f64::INFINITY);

    let (hits, emitted) = (0..RAYS)
        .into_par_iter()
        .map_init(
            || StdRng::from_entropy(),
            |rng, _| {
                let ray = Ray::new(Vec3::ZERO, random_unit_vector(rng));
                let Some(rec) = tree.hit(&ray, interval) else {
                    return (0usize, Color::ZERO);
                };

                let mut radiance = rec
                    .light
                    .as_ref()
                    .map_or(Color::ZERO, |light| light.radiance());

                // One scattered bounce through the material contract
                let theoretic = reflect(ray.direction, rec.normal);
                let scattered = rec.material.generate(rec.normal, theoretic, rng);
                let bounce = Ray::new(rec.point, scattered);
                if let Some(next) = tree.hit(&bounce, interval) {
                    if let Some(light) = &next.light {
                        radiance += light.radiance();
                    }
                }

                (1usize, radiance)
            },
        )
        .reduce(|| (0, Color::ZERO), |a, b| (a.0 + b.0, a.1 + b.1));

    println!(
        "{} of {} rays hit the scene; mean emitted radiance per ray: {:?}",
        hits,
        RAYS,
        emitted / RAYS as f64
    );
}
