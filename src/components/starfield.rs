//! Decorative star-field background.
//!
//! A fixed set of randomly placed stars generated once at mount; all
//! motion is CSS-driven. Stateless beyond the one-time generation.

use leptos::*;
use rand::Rng;

use crate::config::STAR_COUNT;

/// Placement and timing of one star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Diameter in px.
    pub size: f64,
    /// Vertical position in vh.
    pub top: f64,
    /// Horizontal position in vw.
    pub left: f64,
    /// Base opacity.
    pub opacity: f64,
    /// Twinkle cycle length in seconds.
    pub duration: f64,
    /// Static rotation in degrees.
    pub rotate: f64,
}

/// Generate `count` random stars.
pub fn generate_stars(count: usize) -> Vec<Star> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Star {
            size: rng.gen_range(1.0..4.0),
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.2..1.0),
            duration: rng.gen_range(3.0..8.0),
            rotate: rng.gen_range(0.0..360.0),
        })
        .collect()
}

/// The star layer behind the form.
#[component]
pub fn Starfield() -> impl IntoView {
    let stars = generate_stars(STAR_COUNT);

    view! {
        <div class="starfield">
            {stars
                .into_iter()
                .map(|star| {
                    let style = format!(
                        "width:{:.1}px;height:{:.1}px;top:{:.1}vh;left:{:.1}vw;opacity:{:.2};transform:rotate({:.0}deg);animation-duration:{:.1}s;",
                        star.size,
                        star.size,
                        star.top,
                        star.left,
                        star.opacity,
                        star.rotate,
                        star.duration,
                    );
                    view! { <div class="star" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_count() {
        assert_eq!(generate_stars(0).len(), 0);
        assert_eq!(generate_stars(STAR_COUNT).len(), STAR_COUNT);
    }

    #[test]
    fn stars_stay_inside_their_ranges() {
        for star in generate_stars(500) {
            assert!((1.0..4.0).contains(&star.size));
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.2..1.0).contains(&star.opacity));
            assert!((3.0..8.0).contains(&star.duration));
            assert!((0.0..360.0).contains(&star.rotate));
        }
    }
}
