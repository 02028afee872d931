//! Static page content: sections, features, products, testimonials, FAQ.

/// Scroll targets on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Features,
    Products,
    Testimonials,
    Faq,
    Contact,
}

impl Section {
    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Products => "products",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Products => "TAPO Cameras",
            Section::Testimonials => "Testimonials",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }

    /// Sections linked from the navigation bar.
    pub fn nav() -> [Section; 4] {
        [
            Section::Features,
            Section::Products,
            Section::Testimonials,
            Section::Contact,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub badge: &'static str,
    pub highlights: &'static [&'static str],
    /// Key into [`DEMO_VIDEOS`].
    pub demo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoVideo {
    pub kind: &'static str,
    pub url: &'static str,
    pub title: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Smart 360° rotation",
        description: "Full coverage with no blind spots. Automatic motion tracking keeps the subject in frame.",
    },
    Feature {
        title: "4K night vision",
        description: "Clear footage in complete darkness with next-generation infrared.",
    },
    Feature {
        title: "Smart control",
        description: "An intuitive mobile app with instant push alerts and voice control through Alexa and Google.",
    },
    Feature {
        title: "Secure storage",
        description: "Automatic cloud recording with AES-256 encryption and up to 90 days of history.",
    },
    Feature {
        title: "AI recognition",
        description: "Tells people, pets, vehicles and parcels apart for fewer false alarms.",
    },
    Feature {
        title: "Stable connection",
        description: "Dual-band WiFi 6 with automatic reconnection and offline local recording.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "TAPO C210 Pan/Tilt",
        price: "$29.99",
        original_price: "$59.99",
        badge: "Most popular",
        highlights: &[
            "Full 360° rotation",
            "HD night vision",
            "Two-way audio",
            "AI motion detection",
            "Works with Alexa & Google",
        ],
        demo: "c210",
    },
    Product {
        name: "TAPO C510 Outdoor",
        price: "$59.99",
        original_price: "$79.99",
        badge: "Outdoor",
        highlights: &[
            "IP66 weatherproof",
            "3MP 2K Ultra HD",
            "Built-in 110dB siren",
            "Custom activity zones",
            "24/7 continuous recording",
        ],
        demo: "c510",
    },
    Product {
        name: "TAPO C420S Solar",
        price: "$69.99",
        original_price: "$89.99",
        badge: "Eco-friendly",
        highlights: &[
            "High-efficiency solar panel",
            "6-month rechargeable battery",
            "Fully wireless",
            "AI face recognition",
            "Cable-free installation",
        ],
        demo: "c402",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "María González",
        role: "Mother of three",
        quote: "The TAPO cameras from 360 Security give me real peace of mind. I can check on the house from work and the alerts are instant.",
        rating: 5,
    },
    Testimonial {
        name: "Carlos Rodríguez",
        role: "Business owner",
        quote: "I installed the system at my shop and at home. The integration is seamless and the support team is exceptional.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Martínez",
        role: "Retired",
        quote: "I thought it would be complicated at my age, but the app is very intuitive. My children help me set it up remotely.",
        rating: 5,
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What does professional installation include?",
        answer: "Free installation by certified technicians, full mobile app setup, an in-person walkthrough and 60 days of priority support.",
    },
    FaqEntry {
        question: "Do TAPO cameras work without internet?",
        answer: "Yes. They record locally to an SD card of up to 512GB. Remote viewing and real-time alerts need a stable connection.",
    },
    FaqEntry {
        question: "How much does cloud storage cost?",
        answer: "The first 30 days are free. Plans then start at $4.99 per camera per month with continuous recording.",
    },
    FaqEntry {
        question: "Do they work with Alexa and Google Assistant?",
        answer: "All of our TAPO cameras work with Alexa, Google Assistant, Apple HomeKit and most home automation systems.",
    },
    FaqEntry {
        question: "What warranty do you offer?",
        answer: "Three years covering manufacturing defects, malfunctions and connectivity problems, with 24/7 support.",
    },
    FaqEntry {
        question: "Is my data private?",
        answer: "Footage is encrypted with AES-256 and never shared with third parties. You stay in control of your information.",
    },
];

pub const DEMO_VIDEOS: &[DemoVideo] = &[
    DemoVideo {
        kind: "general",
        url: "/videos/general.mp4",
        title: "Live demo: 360 Security TAPO system",
    },
    DemoVideo {
        kind: "navigation",
        url: "/videos/navigation.mp4",
        title: "Navigation and control: TAPO cameras",
    },
    DemoVideo {
        kind: "c210",
        url: "/videos/demo-c210.mp4",
        title: "TAPO C210 Pan/Tilt walkthrough",
    },
    DemoVideo {
        kind: "c510",
        url: "/videos/demo-c510.mp4",
        title: "TAPO C510 Outdoor: weather and image quality",
    },
    DemoVideo {
        kind: "c402",
        url: "/videos/demo-c402.mp4",
        title: "TAPO solar camera: running on sunlight",
    },
];

/// Looks up a demo by kind, falling back to the general demo.
pub fn demo_video(kind: &str) -> &'static DemoVideo {
    DEMO_VIDEOS
        .iter()
        .find(|video| video.kind == kind)
        .unwrap_or(&DEMO_VIDEOS[0])
}
