pub(crate) const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Backend Engineer",
    "Frontend Engineer",
    "Full Stack Developer",
    "Mobile Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Data Engineer",
    "Data Scientist",
    "Data Analyst",
    "Machine Learning Engineer",
    "QA Engineer",
    "Security Engineer",
    "Cloud Architect",
    "Engineering Manager",
    "Product Manager",
    "Project Manager",
    "Product Designer",
    "UX Designer",
    "UI Designer",
    "Business Analyst",
    "Technical Writer",
    "Scrum Master",
    "IT Support Specialist",
    "Systems Administrator",
];

pub(crate) const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue.js",
    "Angular",
    "Node.js",
    "Python",
    "Django",
    "Java",
    "Spring Boot",
    "C#",
    ".NET",
    "Go",
    "Rust",
    "PHP",
    "Laravel",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "Google Cloud",
    "CI/CD",
    "Git",
    "GraphQL",
    "REST APIs",
    "Figma",
    "Agile",
    "Machine Learning",
];

pub(crate) const WORK_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Freelance",
    "Internship",
    "Remote",
    "Hybrid",
    "On-site",
];

pub(crate) const POPULAR_LOCATIONS: &[&str] = &[
    "Casablanca",
    "Rabat",
    "Marrakech",
    "Tangier",
    "Fes",
    "Agadir",
    "Meknes",
    "Oujda",
    "Kenitra",
    "Tetouan",
    "Remote",
];
