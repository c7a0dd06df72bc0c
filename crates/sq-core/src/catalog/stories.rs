//! Story units per topic.

use super::{PanelDef, StoryDef};

macro_rules! panel {
    ($n:literal, $path:literal, $caption:literal) => {
        PanelDef {
            panel_number: $n,
            image_url: concat!("https://images.pexels.com/photos/", $path, "?auto=compress&cs=tinysrgb&w=800"),
            caption: $caption,
        }
    };
}

pub static PHOTOSYNTHESIS: StoryDef = StoryDef {
    title: "The Photosynthesis Adventure",
    emoji: "🌱",
    panels: &[
        panel!(1, "1263986/pexels-photo-1263986.jpeg",
            "Meet Chloro, a tiny chloroplast living inside a green leaf! Chloro loves to make food for the plant."),
        panel!(2, "414144/pexels-photo-414144.jpeg",
            "Every morning, the sun shines bright rays of light down to the leaf. This light energy is very special!"),
        panel!(3, "1108572/pexels-photo-1108572.jpeg",
            "Chloro catches the sunlight using special green molecules called chlorophyll. They work like tiny solar panels!"),
        panel!(4, "1405372/pexels-photo-1405372.jpeg",
            "The plant's roots drink water from the soil and send it up to the leaves through tiny tubes."),
        panel!(5, "414263/pexels-photo-414263.jpeg",
            "Chloro also collects carbon dioxide from the air through tiny holes in the leaf called stomata."),
        panel!(6, "1268975/pexels-photo-1268975.jpeg",
            "Using sunlight energy, water, and carbon dioxide, Chloro makes glucose - a sweet sugar that feeds the plant!"),
        panel!(7, "462118/pexels-photo-462118.jpeg",
            "As a bonus, Chloro releases oxygen into the air. This is the oxygen that we breathe!"),
        panel!(8, "1190297/pexels-photo-1190297.jpeg",
            "Thanks to photosynthesis, plants make their own food and give us fresh air. Chloro is a true hero!"),
    ],
};

pub static SPACE: StoryDef = StoryDef {
    title: "Journey Through the Solar System",
    emoji: "🌟",
    panels: &[
        panel!(1, "2166711/pexels-photo-2166711.jpeg",
            "Hi! I'm Stella, and I'm taking you on an amazing tour of our solar system!"),
        panel!(2, "87651/sun-fireball-solar-flare-sunlight-87651.jpeg",
            "Our journey starts with the Sun - a giant ball of hot gas that gives light and warmth to all the planets."),
        panel!(3, "87009/earth-soil-creep-moon-lunar-87009.jpeg",
            "Mercury is the closest planet to the Sun. It's small, rocky, and very hot during the day!"),
        panel!(4, "87611/sun-solar-flare-solar-storm-eruption-87611.jpeg",
            "Venus is covered in thick clouds. It's the hottest planet because its atmosphere traps heat like a blanket."),
        panel!(5, "220201/pexels-photo-220201.jpeg",
            "Earth is our home! It has water, air, and the perfect temperature for life to thrive."),
        panel!(6, "73910/mars-mars-rover-space-travel-robot-73910.jpeg",
            "Mars is called the Red Planet because of its rusty red soil. Scientists think it might have had water long ago!"),
        panel!(7, "39649/space-cosmos-universe-blue-39649.jpeg",
            "Jupiter is HUGE - the biggest planet! It has colorful bands of clouds and a giant storm called the Great Red Spot."),
        panel!(8, "3617457/pexels-photo-3617457.jpeg",
            "Isn't space amazing? There's so much to explore in our cosmic neighborhood!"),
    ],
};

pub static DINOSAURS: StoryDef = StoryDef {
    title: "Rex's Dinosaur Discovery",
    emoji: "🦕",
    panels: &[
        panel!(1, "3075993/pexels-photo-3075993.jpeg",
            "Hello! I'm Rex, and I'm going to tell you about my amazing dinosaur ancestors!"),
        panel!(2, "163872/italy-crostolo-dinosaur-park-reggio-emilia-163872.jpeg",
            "Dinosaurs lived millions of years ago during three time periods: Triassic, Jurassic, and Cretaceous."),
        panel!(3, "3075996/pexels-photo-3075996.jpeg",
            "Some dinosaurs were HUGE! The Brachiosaurus was as tall as a 4-story building!"),
        panel!(4, "5730898/pexels-photo-5730898.jpeg",
            "T-Rex was a fierce predator with powerful jaws and sharp teeth as big as bananas!"),
        panel!(5, "356040/pexels-photo-356040.jpeg",
            "Not all dinosaurs were scary! Triceratops was a plant-eater with three horns and a big frill."),
        panel!(6, "8828489/pexels-photo-8828489.jpeg",
            "Scientists study fossils - old bones and footprints - to learn how dinosaurs lived."),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=800";

    #[test]
    fn image_urls_are_sized_pexels_links() {
        for def in [&PHOTOSYNTHESIS, &SPACE, &DINOSAURS] {
            for panel in def.panels {
                assert!(panel.image_url.starts_with("https://images.pexels.com/photos/"));
                assert!(panel.image_url.ends_with(IMAGE_PARAMS));
            }
        }
    }
}
