//! Static catalogs rendered by the informational pages

pub struct Service {
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        let rating = usize::from(self.rating.min(5));

        format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
    }
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqGroup {
    pub category: &'static str,
    pub entries: &'static [Faq],
}

pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Accounting Services",
        slug: "accounting",
        description: "Monthly bookkeeping, ledger management and financial documentation for SMEs and individuals.",
    },
    Service {
        title: "Monthly VAT Reporting",
        slug: "vat-reporting",
        description: "Accurate VAT calculations, monthly filings and compliance with Finnish tax authorities.",
    },
    Service {
        title: "Annual Book Closing & Tax Returns",
        slug: "annual-book-closing",
        description: "Year-end financial statements, tax return filing, profit & loss and balance sheet preparation.",
    },
    Service {
        title: "Business Startup & SME Launch Guidance",
        slug: "business-startup",
        description: "Step-by-step support to register, structure and launch new businesses in Finland.",
    },
    Service {
        title: "Immigration Guidance (Finland & EU)",
        slug: "immigration",
        description: "Residence and work permit guidance, documentation review and process support for Finland and EU.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ahmed, Small Business Owner",
        location: "Helsinki, Finland",
        rating: 5,
        text: "WEBA Consultants handled my VAT and bookkeeping with zero stress. Clear communication and reliable service.",
    },
    Testimonial {
        name: "Sara, Student",
        location: "Pakistan → Finland",
        rating: 5,
        text: "Their immigration guidance helped me understand every step of the residence permit process.",
    },
    Testimonial {
        name: "Mikael, Entrepreneur",
        location: "Espoo, Finland",
        rating: 4,
        text: "Professional advice for company registration and tax planning. Highly recommended for new founders.",
    },
];

pub const FAQS: &[FaqGroup] = &[
    FaqGroup {
        category: "Accounting & VAT",
        entries: &[
            Faq {
                question: "Do I need monthly bookkeeping for a small business?",
                answer: "Yes, regular bookkeeping helps you stay compliant and gives visibility into your finances.",
            },
            Faq {
                question: "How often do I need to submit VAT reports?",
                answer: "Most businesses submit VAT monthly or quarterly depending on their registration.",
            },
        ],
    },
    FaqGroup {
        category: "Business Registration",
        entries: &[Faq {
            question: "Can you help me open a company in Finland?",
            answer: "Yes, we guide you through the registration process, documentation and financial setup.",
        }],
    },
    FaqGroup {
        category: "Immigration",
        entries: &[Faq {
            question: "Do you provide guidance for Finland and other EU countries?",
            answer: "Yes, we provide general immigration guidance for Finland and selected EU countries.",
        }],
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "5 Key Steps To Start a Business in Finland",
        date: "2025-01-10",
        summary: "An overview of registration, taxation, permits and financial planning for new entrepreneurs.",
    },
    BlogPost {
        title: "Understanding VAT for SMEs in Finland",
        date: "2025-02-01",
        summary: "What VAT is, who needs to register and how monthly reporting works.",
    },
];

/// Testimonials featured on the home page
pub fn featured_testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS[..TESTIMONIALS.len().min(3)]
}
