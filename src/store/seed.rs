//! Mock data the session starts from. ATS scores are rolled fresh at seed
//! time; everything else is fixed.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::Collections;
use crate::error::Result;
use crate::models::candidate::{
    Candidate, CandidateStatus, EducationEntry, ExperienceEntry, ExperienceLevel, ProcessStep,
};
use crate::models::communication::{Communication, CommunicationType};
use crate::models::note::Note;
use crate::models::reporting::{Activity, DepartmentMetric, Document, FunnelStage, TimelinePoint};
use crate::models::supplier::Supplier;
use crate::models::user::User;
use crate::services::auth_service::hash_password;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid seed timestamp")
}

fn ats_score() -> i32 {
    rand::thread_rng().gen_range(0..=100)
}

fn candidate(
    id: i64,
    name: &str,
    email: &str,
    phone: &str,
    position: &str,
    department: &str,
    location: &str,
    status: CandidateStatus,
    applied: NaiveDate,
    level: ExperienceLevel,
    skills: &[&str],
    rating: i32,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        status,
        applied_date: applied,
        experience_level: level,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        rating,
        ats_score: ats_score(),
        about: None,
        experience: None,
        education: None,
        process: None,
        user_id: None,
    }
}

fn candidates() -> Vec<Candidate> {
    let mut sarah = candidate(
        1,
        "Sarah Johnson",
        "sarah.j@example.com",
        "+1 (555) 123-4567",
        "Senior React Developer",
        "Engineering",
        "New York, NY",
        CandidateStatus::Interviewing,
        date(2025, 3, 10),
        ExperienceLevel::Senior,
        &["React", "TypeScript", "Node.js", "GraphQL", "AWS"],
        4,
    );
    sarah.about = Some(
        "Full-stack developer with 7+ years of experience specializing in React and Node.js. \
         Previously worked at top tech companies and led multiple successful projects."
            .to_string(),
    );
    sarah.experience = Some(vec![
        ExperienceEntry {
            title: "Lead Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            period: "2022 - Present".to_string(),
            description: "Led a team of 5 developers in building responsive web applications \
                          using React and TypeScript."
                .to_string(),
        },
        ExperienceEntry {
            title: "Senior Developer".to_string(),
            company: "WebSolutions Ltd.".to_string(),
            period: "2019 - 2022".to_string(),
            description: "Developed and maintained multiple client projects using React, Redux, \
                          and Node.js."
                .to_string(),
        },
    ]);
    sarah.education = Some(vec![
        EducationEntry {
            degree: "M.S. Computer Science".to_string(),
            institution: "Stanford University".to_string(),
            period: "2017 - 2019".to_string(),
        },
        EducationEntry {
            degree: "B.S. Computer Science".to_string(),
            institution: "UC Berkeley".to_string(),
            period: "2013 - 2017".to_string(),
        },
    ]);
    sarah.process = Some(vec![
        ProcessStep {
            name: "Application Review".to_string(),
            completed: true,
            scheduled: None,
            date: Some("Mar 12, 2025".to_string()),
        },
        ProcessStep {
            name: "Phone Screening".to_string(),
            completed: true,
            scheduled: None,
            date: Some("Mar 15, 2025".to_string()),
        },
        ProcessStep {
            name: "Technical Interview".to_string(),
            completed: true,
            scheduled: None,
            date: Some("Mar 20, 2025".to_string()),
        },
        ProcessStep {
            name: "Team Interview".to_string(),
            completed: false,
            scheduled: Some(true),
            date: Some("Mar 28, 2025".to_string()),
        },
        ProcessStep {
            name: "Offer & Negotiation".to_string(),
            completed: false,
            scheduled: Some(false),
            date: None,
        },
    ]);

    vec![
        sarah,
        candidate(
            2,
            "Michael Chen",
            "michael.c@example.com",
            "+1 (555) 987-6543",
            "Product Manager",
            "Product",
            "San Francisco, CA",
            CandidateStatus::Assessment,
            date(2025, 3, 12),
            ExperienceLevel::MidLevel,
            &["Product Management", "Agile", "User Research", "Data Analysis", "Wireframing"],
            5,
        ),
        candidate(
            3,
            "Emily Rodriguez",
            "emily.r@example.com",
            "+1 (555) 234-5678",
            "Marketing Specialist",
            "Marketing",
            "Chicago, IL",
            CandidateStatus::New,
            date(2025, 3, 15),
            ExperienceLevel::EntryLevel,
            &["Social Media", "Content Creation", "SEO", "Analytics", "Copywriting"],
            3,
        ),
        candidate(
            4,
            "David Kim",
            "david.k@example.com",
            "+1 (555) 876-5432",
            "DevOps Engineer",
            "Engineering",
            "Austin, TX",
            CandidateStatus::Screening,
            date(2025, 3, 8),
            ExperienceLevel::Senior,
            &["AWS", "Docker", "Kubernetes", "CI/CD", "Terraform", "Linux"],
            4,
        ),
        candidate(
            5,
            "Jessica Brown",
            "jessica.b@example.com",
            "+1 (555) 345-6789",
            "UX/UI Designer",
            "Product",
            "Seattle, WA",
            CandidateStatus::Offered,
            date(2025, 3, 5),
            ExperienceLevel::Senior,
            &["Figma", "User Research", "Prototyping", "Information Architecture", "Adobe Suite"],
            5,
        ),
        candidate(
            6,
            "Robert Taylor",
            "robert.t@example.com",
            "+1 (555) 456-7890",
            "Sales Manager",
            "Sales",
            "Boston, MA",
            CandidateStatus::Hired,
            date(2025, 2, 28),
            ExperienceLevel::Manager,
            &["B2B Sales", "CRM", "Sales Strategy", "Team Management", "Client Relations"],
            4,
        ),
        candidate(
            7,
            "Amanda Lee",
            "amanda.l@example.com",
            "+1 (555) 567-8901",
            "Data Scientist",
            "Engineering",
            "Remote",
            CandidateStatus::Rejected,
            date(2025, 3, 7),
            ExperienceLevel::MidLevel,
            &["Python", "Machine Learning", "SQL", "Data Visualization", "Statistics"],
            3,
        ),
    ]
}

fn supplier(
    id: i64,
    name: &str,
    title: &str,
    category: &str,
    contact_email: &str,
    contact_phone: &str,
    address: &str,
    created_at: &str,
    price: Decimal,
    delivery_time: i64,
    quality: i32,
) -> Supplier {
    Supplier {
        id,
        name: name.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        contact_email: contact_email.to_string(),
        contact_phone: contact_phone.to_string(),
        address: address.to_string(),
        created_at: ts(created_at),
        price,
        delivery_time,
        quality,
        is_active: true,
    }
}

fn suppliers() -> Vec<Supplier> {
    vec![
        supplier(
            1,
            "TechSupply Inc.",
            "Technology Equipment Provider",
            "Electronics",
            "sales@techsupply.com",
            "+1-555-0101",
            "123 Tech Lane, Silicon Valley, CA",
            "2024-12-01T10:00:00Z",
            Decimal::new(15050, 2),
            3,
            85,
        ),
        supplier(
            2,
            "GreenGoods Co.",
            "Sustainable Materials Supplier",
            "Eco-Friendly",
            "info@greengoods.com",
            "+1-555-0102",
            "456 Green Road, Portland, OR",
            "2024-11-15T14:30:00Z",
            Decimal::new(7500, 2),
            7,
            92,
        ),
        supplier(
            3,
            "FastFreight Ltd.",
            "Logistics and Shipping",
            "Transportation",
            "contact@fastfreight.com",
            "+1-555-0103",
            "789 Speed Ave, Chicago, IL",
            "2024-10-20T09:15:00Z",
            Decimal::new(20000, 2),
            1,
            78,
        ),
        supplier(
            4,
            "OfficeEssentials",
            "Office Supplies Distributor",
            "Office",
            "support@officeessentials.com",
            "+1-555-0104",
            "321 Paper St, Austin, TX",
            "2024-09-10T13:45:00Z",
            Decimal::new(5025, 2),
            14,
            65,
        ),
        supplier(
            5,
            "LuxuryImports",
            "High-End Product Importer",
            "Luxury",
            "sales@luxuryimports.com",
            "+1-555-0105",
            "654 Elite Blvd, Miami, FL",
            "2024-08-05T16:20:00Z",
            Decimal::new(50000, 2),
            30,
            95,
        ),
    ]
}

fn timeline() -> Vec<TimelinePoint> {
    [
        ("Jan", 42, 25, 10, 8),
        ("Feb", 38, 22, 12, 10),
        ("Mar", 56, 34, 15, 12),
        ("Apr", 52, 30, 18, 14),
        ("May", 48, 28, 13, 11),
        ("Jun", 60, 40, 20, 16),
    ]
    .iter()
    .map(|(month, applications, interviews, offers, hires)| TimelinePoint {
        month: month.to_string(),
        applications: *applications,
        interviews: *interviews,
        offers: *offers,
        hires: *hires,
    })
    .collect()
}

fn funnel() -> Vec<FunnelStage> {
    [
        ("Applications", 230, "bg-blue-500"),
        ("Screening", 150, "bg-purple-500"),
        ("Interviews", 90, "bg-indigo-500"),
        ("Assessments", 60, "bg-amber-500"),
        ("Offers", 30, "bg-green-500"),
        ("Hires", 22, "bg-emerald-500"),
    ]
    .iter()
    .map(|(name, count, color)| FunnelStage {
        name: name.to_string(),
        count: *count,
        color: color.to_string(),
    })
    .collect()
}

fn activities() -> Vec<Activity> {
    [
        (
            1,
            "email",
            "HR Team sent an interview invitation to Sarah Johnson",
            "2025-03-17T09:30:00Z",
        ),
        (
            2,
            "status_change",
            "Michael Chen moved from Screening to Assessment",
            "2025-03-17T08:45:00Z",
        ),
        (
            3,
            "document",
            "Jessica Brown uploaded a portfolio document",
            "2025-03-16T15:20:00Z",
        ),
        (
            4,
            "interview",
            "Technical interview scheduled with David Kim for tomorrow at 11:00 AM",
            "2025-03-16T14:10:00Z",
        ),
        (
            5,
            "hired",
            "Robert Taylor was hired as Sales Manager",
            "2025-03-15T16:30:00Z",
        ),
        (
            6,
            "rejected",
            "Amanda Lee was rejected for Data Scientist position",
            "2025-03-14T11:45:00Z",
        ),
    ]
    .iter()
    .map(|(id, kind, description, at)| Activity {
        id: *id,
        kind: kind.to_string(),
        description: description.to_string(),
        date: ts(at),
    })
    .collect()
}

fn department_metrics() -> Vec<DepartmentMetric> {
    [
        (1, "Engineering", 8, 45, 20, 35, 75, "bg-blue-500"),
        (2, "Product", 5, 32, 15, 28, 60, "bg-purple-500"),
        (3, "Marketing", 4, 28, 12, 25, 50, "bg-indigo-500"),
        (4, "Sales", 6, 35, 18, 21, 80, "bg-green-500"),
        (5, "Finance", 3, 22, 10, 30, 33, "bg-amber-500"),
        (6, "HR", 2, 15, 8, 20, 50, "bg-pink-500"),
    ]
    .iter()
    .map(
        |(id, name, open_positions, active_candidates, interviews, time_to_hire, fill_rate, color)| {
            DepartmentMetric {
                id: *id,
                name: name.to_string(),
                open_positions: *open_positions,
                active_candidates: *active_candidates,
                interviews: *interviews,
                time_to_hire: *time_to_hire,
                fill_rate: *fill_rate,
                color: color.to_string(),
            }
        },
    )
    .collect()
}

fn documents() -> Vec<Document> {
    [
        (1, "Sarah Johnson - Resume.pdf", "pdf", "1.2 MB", "2025-03-10T08:30:00Z", "Sarah Johnson"),
        (2, "Cover Letter.pdf", "pdf", "580 KB", "2025-03-10T08:32:00Z", "Sarah Johnson"),
        (3, "Portfolio_SarahJ.zip", "zip", "5.7 MB", "2025-03-10T08:35:00Z", "Sarah Johnson"),
        (
            4,
            "Technical_Assessment_Results.pdf",
            "pdf",
            "890 KB",
            "2025-03-18T14:22:00Z",
            "Admin User",
        ),
    ]
    .iter()
    .map(|(id, name, file_type, file_size, uploaded_at, uploaded_by)| Document {
        id: *id,
        candidate_id: 1,
        name: name.to_string(),
        file_type: file_type.to_string(),
        file_size: file_size.to_string(),
        uploaded_at: ts(uploaded_at),
        uploaded_by: uploaded_by.to_string(),
    })
    .collect()
}

pub(super) fn collections() -> Result<Collections> {
    let admin = User {
        id: Uuid::new_v4(),
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        phone: None,
        role: "Admin".to_string(),
        department: "HR".to_string(),
        avatar: String::new(),
        password_hash: hash_password("admin123")?,
    };
    let jane = User {
        id: Uuid::new_v4(),
        name: "Jane Smith".to_string(),
        email: "jane.smith@example.com".to_string(),
        phone: None,
        role: "User".to_string(),
        department: "General".to_string(),
        avatar: String::new(),
        password_hash: hash_password("password123")?,
    };

    let notes = vec![
        Note {
            id: 1,
            candidate_id: 1,
            content: "Candidate has excellent technical skills and demonstrated good \
                      problem-solving abilities during the screening call."
                .to_string(),
            created_by: admin.id,
            created_by_name: admin.name.clone(),
            created_at: ts("2025-03-16T13:20:00Z"),
            updated_at: None,
        },
        Note {
            id: 2,
            candidate_id: 1,
            content: "References check came back positive. Previous manager spoke highly of her \
                      team collaboration skills."
                .to_string(),
            created_by: jane.id,
            created_by_name: jane.name.clone(),
            created_at: ts("2025-03-17T09:15:00Z"),
            updated_at: None,
        },
    ];

    let communications = vec![
        Communication {
            id: 1,
            candidate_id: 1,
            kind: CommunicationType::Email,
            subject: "Interview Invitation".to_string(),
            content: "Hi Sarah,\n\nWe were impressed by your application and would like to \
                      invite you for a technical interview. Please let me know your availability \
                      for next week.\n\nBest regards,\nHR Team"
                .to_string(),
            date: ts("2025-03-15T10:30:00Z"),
            sent_by: admin.id.to_string(),
            sent_by_name: admin.name.clone(),
            duration: None,
        },
        Communication {
            id: 2,
            candidate_id: 1,
            kind: CommunicationType::Email,
            subject: "Re: Interview Invitation".to_string(),
            content: "Hello,\n\nThank you for the invitation. I am available on Monday and \
                      Tuesday next week from 10 AM to 2 PM EST.\n\nBest,\nSarah"
                .to_string(),
            date: ts("2025-03-15T14:45:00Z"),
            sent_by: "external".to_string(),
            sent_by_name: "Sarah Johnson".to_string(),
            duration: None,
        },
        Communication {
            id: 3,
            candidate_id: 1,
            kind: CommunicationType::Call,
            subject: "Phone Screening".to_string(),
            content: "Discussed previous experience and project work. Candidate has strong \
                      background in React development with good communication skills. \
                      Recommended to proceed to technical interview."
                .to_string(),
            date: ts("2025-03-16T11:00:00Z"),
            sent_by: admin.id.to_string(),
            sent_by_name: admin.name.clone(),
            duration: Some("25 minutes".to_string()),
        },
    ];

    Ok(Collections {
        candidates: candidates(),
        suppliers: suppliers(),
        notes,
        communications,
        documents: documents(),
        activities: activities(),
        department_metrics: department_metrics(),
        funnel: funnel(),
        timeline: timeline(),
        users: vec![admin, jane],
        next_candidate_id: 8,
        next_note_id: 3,
        next_communication_id: 4,
    })
}
