// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundled section documents - compiled into the binary
//!
//! These are the authoritative shape reference for each section and the
//! last fallback when neither the remote store nor the cache can answer.

use serde_json::{json, Value};

use super::types::Section;

/// Default document for a section
pub(crate) fn document(section: Section) -> Value {
    match section {
        Section::About => about(),
        Section::WhyUs => why_us(),
        Section::Faq => faq(),
        Section::Footer => footer(),
        Section::Contact => contact(),
        Section::Courses => courses(),
        Section::Testimonials => testimonials(),
    }
}

fn about() -> Value {
    json!({
        "title": "About the Institute",
        "subtitle": "Established in 2005, the Institute of Aesthetic Sciences is a premier center for aesthetic education, combining modern infrastructure with world-class faculty to deliver exceptional training programs. Our international certification and state-of-the-art facilities ensure students receive the best education to excel in the growing field of aesthetic medicine.",
        "imageUrl": "https://images.unsplash.com/photo-1629909613654-28e377c37b09?q=80&w=2068&auto=format&fit=crop",
        "credentials": [
            {
                "id": 1,
                "icon": "Medal",
                "title": "ISO Certified",
                "description": "9001:2015 certified institution for quality management systems"
            },
            {
                "id": 2,
                "icon": "Building",
                "title": "15+ Years of Excellence",
                "description": "Pioneering aesthetic medicine education since 2005"
            },
            {
                "id": 3,
                "icon": "Users",
                "title": "5000+ Alumni Network",
                "description": "Professionals thriving in clinics across 32 countries"
            },
            {
                "id": 4,
                "icon": "GraduationCap",
                "title": "Expert Faculty",
                "description": "Learn from renowned cosmetic surgeons and practitioners"
            }
        ]
    })
}

fn why_us() -> Value {
    json!({
        "title": "Why Choose Us",
        "subtitle": "Our institute stands out through excellence in training, international recognition, and a commitment to producing highly skilled aesthetic medicine professionals",
        "footerText": "Join over 5000+ successful alumni from 32 countries",
        "features": [
            {
                "id": 1,
                "icon": "Globe",
                "title": "Internationally Recognized Curriculum",
                "description": "Our curriculum meets international standards and is recognized by aesthetic medicine bodies worldwide"
            },
            {
                "id": 2,
                "icon": "UserCheck",
                "title": "Hands-On Live Model Training",
                "description": "Gain practical experience through extensive hands-on training with real patients under expert supervision"
            },
            {
                "id": 3,
                "icon": "Award",
                "title": "Expert Cosmetic Surgeons as Trainers",
                "description": "Learn directly from practicing cosmetic surgeons with decades of clinical and teaching experience"
            }
        ]
    })
}

fn faq() -> Value {
    json!({
        "title": "Frequently Asked Questions",
        "subtitle": "Find answers to common questions about our courses, certifications, and enrollment process",
        "faqs": [
            {
                "id": 1,
                "question": "What are the eligibility requirements for the courses?",
                "answer": "Our courses are designed for medical professionals including doctors, dentists, and nurses. For specific courses, additional criteria may apply. Please contact our admissions team for details relevant to your specific qualifications."
            },
            {
                "id": 2,
                "question": "How long are the courses and what are the timings?",
                "answer": "Course durations range from weekend workshops to comprehensive 3-month programs. Classes typically run from 9am to 5pm for full-day sessions. We offer weekend batches and weekday options to accommodate working professionals."
            },
            {
                "id": 3,
                "question": "Is the international certification valid worldwide?",
                "answer": "Yes, our certifications are internationally recognized and allow you to practice in most countries, subject to local regulatory requirements. We specifically design our curriculum to meet global standards in aesthetic medicine."
            },
            {
                "id": 4,
                "question": "What career opportunities are available after completing the courses?",
                "answer": "Graduates can work in medical spas, aesthetic clinics, wellness centers, or set up their own practice. Our placement cell assists with finding suitable positions."
            },
            {
                "id": 5,
                "question": "Do you provide accommodation for outstation students?",
                "answer": "While we don't directly provide accommodation, we assist outstation students in finding suitable housing options near the institute through our network of trusted partners."
            }
        ]
    })
}

fn footer() -> Value {
    json!({
        "companyName": "Institute of Aesthetic Sciences",
        "copyrightText": "© 2023 Institute of Aesthetic Sciences. All rights reserved.",
        "tagline": "Transforming careers in aesthetic medicine with world-class education",
        "address": "123 Medical Center Boulevard, Bangalore - 560001, India",
        "email": "admissions@aestheticsciences.edu",
        "phone": "+91 1234567890",
        "footerLogo": "/logo-white.png",
        "socialLinks": [
            {
                "id": 1,
                "platform": "Facebook",
                "icon": "Facebook",
                "url": "https://facebook.com/institute-aesthetic-sciences"
            },
            {
                "id": 2,
                "platform": "Instagram",
                "icon": "Instagram",
                "url": "https://instagram.com/aesthetic_sciences"
            }
        ],
        "quickLinks": [
            { "id": 1, "label": "Courses", "url": "/courses" },
            { "id": 2, "label": "About Us", "url": "/about" }
        ]
    })
}

fn contact() -> Value {
    json!({
        "title": "Contact & Location",
        "subtitle": "Get in touch with our admissions team to learn more about our courses or schedule a campus visit",
        "mapEmbedUrl": "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3887.9977310486996!2d77.59684717479637!3d12.970070615383941",
        "address": {
            "title": "Address",
            "line1": "42, Prestige Tower, MG Road",
            "line2": "Bangalore, Karnataka 560001"
        },
        "phone": {
            "title": "Phone",
            "number1": "+91 98765 43210",
            "number2": "+91 80 2345 6789"
        },
        "email": {
            "title": "Email",
            "email1": "admissions@aestheticsci.edu",
            "email2": "info@aestheticsci.edu"
        },
        "hours": {
            "title": "Office Hours",
            "line1": "Mon-Fri: 9:00 AM - 6:00 PM",
            "line2": "Sat: 9:00 AM - 1:00 PM"
        },
        "buttons": {
            "callButton": "Call Now",
            "directionsButton": "Get Directions"
        }
    })
}

fn courses() -> Value {
    json!({
        "title": "Courses Offered",
        "subtitle": "Choose from our range of internationally recognized certification programs designed to elevate your career in aesthetic medicine and cosmetology",
        "courses": [
            {
                "id": "facial-aesthetic",
                "title": "Diploma in Facial Aesthetic Surgery",
                "description": "Master advanced facial aesthetic procedures including fillers, botulinum toxin, thread lifts, and more.",
                "image": "https://images.unsplash.com/photo-1629909615184-74f495363b67?q=80&w=2069&auto=format&fit=crop",
                "duration": "6 Months",
                "mode": "Offline/Hybrid",
                "certification": "International",
                "batchSize": 10,
                "startDate": "August 15, 2023"
            },
            {
                "id": "advanced-cosmetology",
                "title": "Advanced Cosmetology Certification",
                "description": "Comprehensive training in modern cosmetology techniques, skin care treatments, and client management.",
                "image": "https://images.pexels.com/photos/3373716/pexels-photo-3373716.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "duration": "4 Months",
                "mode": "Offline",
                "certification": "International",
                "batchSize": 12,
                "startDate": "September 5, 2023"
            },
            {
                "id": "master-program",
                "title": "Combined Master Program",
                "description": "Elite comprehensive program combining aesthetic surgery and cosmetology for complete mastery.",
                "image": "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?q=80&w=1932&auto=format&fit=crop",
                "duration": "9 Months",
                "mode": "Hybrid",
                "certification": "International Gold",
                "batchSize": 8,
                "startDate": "July 20, 2023"
            }
        ]
    })
}

fn testimonials() -> Value {
    json!({
        "title": "Student Testimonials",
        "subtitle": "Hear from our alumni about how our programs have transformed their careers and opened new opportunities in aesthetic medicine",
        "testimonials": [
            {
                "id": 1,
                "name": "Dr. Priya Sharma",
                "image": "https://images.unsplash.com/photo-1594824476967-48c8b964273f?q=80&w=987&auto=format&fit=crop",
                "position": "Aesthetic Surgeon",
                "location": "Mumbai",
                "course": "Diploma in Facial Aesthetic Surgery",
                "rating": 5,
                "quote": "The hands-on training I received was exceptional. I now run my own successful clinic in Mumbai with clients from across Asia. The international certification has opened doors I never thought possible."
            },
            {
                "id": 2,
                "name": "Dr. Raj Malhotra",
                "image": "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?q=80&w=2070&auto=format&fit=crop",
                "position": "Medical Director",
                "location": "Dubai",
                "course": "Combined Master Program",
                "rating": 5,
                "quote": "After completing the Master Program, I secured a position at a prestigious clinic in Dubai. The curriculum was comprehensive and up-to-date with the latest techniques in aesthetic medicine."
            },
            {
                "id": 3,
                "name": "Dr. Ananya Reddy",
                "image": "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?q=80&w=2070&auto=format&fit=crop",
                "position": "Cosmetologist",
                "location": "Bangalore",
                "course": "Advanced Cosmetology Certification",
                "rating": 5,
                "quote": "The Advanced Cosmetology program transformed my practice. The skills I learned allowed me to expand my services and double my client base within just six months of completion."
            },
            {
                "id": 4,
                "name": "Dr. Vikram Singh",
                "image": "https://images.unsplash.com/photo-1622253692010-333f2da6031d?q=80&w=1964&auto=format&fit=crop",
                "position": "Founder",
                "location": "Delhi",
                "course": "Diploma in Facial Aesthetic Surgery",
                "rating": 5,
                "quote": "The practical exposure and personalized mentoring I received helped me launch my own chain of aesthetic clinics across North India. The institute's network continues to support my growth."
            }
        ]
    })
}
