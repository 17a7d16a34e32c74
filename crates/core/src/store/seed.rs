//! Fixed initial content
//!
//! The chapter collection, pillars, and founders the store is seeded
//! with at process start. Reconstruction of the store resets everything
//! to this set.

use crate::models::{Chapter, ChapterActivity, Founder, Pillar, PillarActivity, DEFAULT_LOGO_URL};

fn act(id: &str, title: &str, description: &str, date: &str, seed: &str) -> ChapterActivity {
    ChapterActivity {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        image_url: format!("https://picsum.photos/seed/{seed}/400/300"),
    }
}

pub fn seed_chapters() -> Vec<Chapter> {
    vec![
        Chapter {
            id: "tagum".to_string(),
            name: "Tagum Chapter".to_string(),
            location: "Tagum City, Davao del Norte".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/tagum/1200/600".to_string()),
            description: Some(
                "Leading the way in urban biodiversity conservation within Tagum City, \
                 focusing on sustainable waste management and green spaces."
                    .to_string(),
            ),
            president: Some("Juan Dela Cruz".to_string()),
            email: Some("dyesabeltagum@gmail.com".to_string()),
            phone: Some("(084) 123-4567".to_string()),
            facebook: Some(
                "https://www.facebook.com/profile.php?id=61578133816723".to_string(),
            ),
            activities: vec![
                act(
                    "t1",
                    "Urban Garden Project",
                    "Establishing edible gardens in public schools.",
                    "Oct 12, 2024",
                    "garden",
                ),
                act(
                    "t2",
                    "Plastic-Free Tagum",
                    "A city-wide campaign to reduce single-use plastics.",
                    "Sept 5, 2024",
                    "plastic",
                ),
            ],
        },
        Chapter {
            id: "nabunturan".to_string(),
            name: "Nabunturan Chapter".to_string(),
            location: "Nabunturan, Davao de Oro".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/nabunturan/1200/600".to_string()),
            description: Some(
                "Championing river rehabilitation and watershed protection in the heart \
                 of Davao de Oro."
                    .to_string(),
            ),
            president: Some("Maria Santos".to_string()),
            email: Some("nabunturan@dyesabel.ph".to_string()),
            phone: Some("(088) 234-5678".to_string()),
            facebook: None,
            activities: vec![act(
                "n1",
                "River Cleanup",
                "Removing 2 tons of waste from the main river systems.",
                "Oct 2, 2024",
                "river",
            )],
        },
        Chapter {
            id: "mati".to_string(),
            name: "Mati Chapter".to_string(),
            location: "Mati City, Davao Oriental".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/mati/1200/600".to_string()),
            description: Some(
                "Protectors of our coastal heritage, the Mati Chapter focuses on marine \
                 life conservation and sustainable tourism."
                    .to_string(),
            ),
            president: Some("Pedro Penduko".to_string()),
            email: Some("mati@dyesabel.ph".to_string()),
            phone: Some("(087) 345-6789".to_string()),
            facebook: None,
            activities: Vec::new(),
        },
        Chapter {
            id: "mabini".to_string(),
            name: "Mabini Chapter".to_string(),
            location: "Mabini, Davao de Oro".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/mabini/1200/600".to_string()),
            description: Some(
                "Empowering local communities through agro-forestry and sustainable \
                 livelihood programs."
                    .to_string(),
            ),
            president: Some("Jose Rizal".to_string()),
            email: Some("mabini@dyesabel.ph".to_string()),
            phone: Some("(088) 456-7890".to_string()),
            facebook: None,
            activities: Vec::new(),
        },
        Chapter {
            id: "maco".to_string(),
            name: "Maco Chapter".to_string(),
            location: "Maco, Davao de Oro".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/maco/1200/600".to_string()),
            description: Some(
                "Advocating for responsible mining practices and reforestation in the \
                 mineral-rich areas of Maco."
                    .to_string(),
            ),
            president: Some("Andres Bonifacio".to_string()),
            email: Some("maco@dyesabel.ph".to_string()),
            phone: Some("(088) 567-8901".to_string()),
            facebook: None,
            activities: Vec::new(),
        },
        Chapter {
            id: "new-corella".to_string(),
            name: "New Corella Chapter".to_string(),
            location: "New Corella, Davao del Norte".to_string(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: Some("https://picsum.photos/seed/corella/1200/600".to_string()),
            description: Some(
                "Guardians of the highland springs and waterfalls, ensuring clean water \
                 access for all."
                    .to_string(),
            ),
            president: Some("Gabriela Silang".to_string()),
            email: Some("newcorella@dyesabel.ph".to_string()),
            phone: Some("(084) 678-9012".to_string()),
            facebook: None,
            activities: Vec::new(),
        },
    ]
}

fn pillar_act(id: &str, title: &str, date: &str, description: &str, seed: &str) -> PillarActivity {
    PillarActivity {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{seed}/400/300"),
    }
}

pub fn seed_pillars() -> Vec<Pillar> {
    vec![
        Pillar {
            id: "marine-conservation".to_string(),
            title: "Marine Conservation".to_string(),
            excerpt: "Protecting the waters that sustain our coastal communities.".to_string(),
            description: "From mangrove reforestation to reef monitoring, our marine \
                          program mobilizes youth volunteers across the Davao gulf to \
                          restore and defend coastal ecosystems."
                .to_string(),
            aim: "Healthy, thriving marine habitats stewarded by local youth.".to_string(),
            image_url: "https://picsum.photos/seed/marine/800/500".to_string(),
            activities: vec![
                pillar_act(
                    "mc1",
                    "Mangrove Reforestation Drive",
                    "Aug 18, 2024",
                    "Planted 3,000 propagules along the Mati coastline.",
                    "mangrove",
                ),
                pillar_act(
                    "mc2",
                    "Reef Watch Training",
                    "Jun 9, 2024",
                    "Certified 40 volunteers in basic reef survey methods.",
                    "reef",
                ),
            ],
        },
        Pillar {
            id: "climate-education".to_string(),
            title: "Climate Education".to_string(),
            excerpt: "Bringing climate literacy into every classroom.".to_string(),
            description: "We partner with schools to deliver workshops, teaching \
                          materials, and student-led campaigns that make climate science \
                          accessible and actionable."
                .to_string(),
            aim: "A generation that understands and acts on the climate crisis.".to_string(),
            image_url: "https://picsum.photos/seed/climate/800/500".to_string(),
            activities: vec![pillar_act(
                "ce1",
                "Climate Classroom Caravan",
                "Jul 22, 2024",
                "Reached 12 public schools across Davao del Norte.",
                "classroom",
            )],
        },
        Pillar {
            id: "waste-management".to_string(),
            title: "Waste Management".to_string(),
            excerpt: "Turning the tide on single-use plastics.".to_string(),
            description: "Community cleanups, materials-recovery drives, and campaigns \
                          pushing local ordinances against single-use plastics."
                .to_string(),
            aim: "Zero-waste communities across the region.".to_string(),
            image_url: "https://picsum.photos/seed/waste/800/500".to_string(),
            activities: vec![pillar_act(
                "wm1",
                "Coastal Cleanup Day",
                "Sep 21, 2024",
                "Collected 1.4 tons of waste with 200 volunteers.",
                "cleanup",
            )],
        },
        Pillar {
            id: "youth-leadership".to_string(),
            title: "Youth Leadership".to_string(),
            excerpt: "Growing the next wave of environmental advocates.".to_string(),
            description: "Leadership camps, chapter mentoring, and advocacy training that \
                          equip young people to organize for their own communities."
                .to_string(),
            aim: "Confident youth leaders running local environmental programs.".to_string(),
            image_url: "https://picsum.photos/seed/leadership/800/500".to_string(),
            activities: vec![pillar_act(
                "yl1",
                "Chapter Leaders Summit",
                "May 4, 2024",
                "Gathered chapter heads for a weekend of advocacy planning.",
                "summit",
            )],
        },
    ]
}

pub fn seed_founders() -> Vec<Founder> {
    vec![
        Founder {
            id: "f1".to_string(),
            name: "Isabel Reyes".to_string(),
            role: "Founder & Executive Director".to_string(),
            bio: "Marine biology graduate who started Dyesabel as a weekend coastal \
                  cleanup crew in 2019."
                .to_string(),
            image_url: "https://picsum.photos/seed/isabel/300/300".to_string(),
        },
        Founder {
            id: "f2".to_string(),
            name: "Marco Villanueva".to_string(),
            role: "Co-Founder, Programs".to_string(),
            bio: "Former student council president turned community organizer, leading \
                  the chapter network."
                .to_string(),
            image_url: "https://picsum.photos/seed/marco/300/300".to_string(),
        },
        Founder {
            id: "f3".to_string(),
            name: "Liza Mercado".to_string(),
            role: "Co-Founder, Partnerships".to_string(),
            bio: "Connects the movement with schools, LGUs, and partner organizations \
                  across Mindanao."
                .to_string(),
            image_url: "https://picsum.photos/seed/liza/300/300".to_string(),
        },
    ]
}
