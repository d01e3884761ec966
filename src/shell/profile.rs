//! Canned portfolio content.
//!
//! Everything here is trusted static text. Each function builds the block one
//! command prints.

use super::content::Content;

/// Display name shown in the banner.
pub const NAME: &str = "Dhanush";

/// Roles cycled by the typewriter banner.
pub const ROLES: &[&str] = &[
    "Backend Developer",
    "ML Engineer",
    "Systems Builder",
    "Python Developer",
    "API Architect",
];

/// Prompt label shown before every echoed input.
pub const PROMPT: &str = "visitor@portfolio:~$";

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1NCT6ZCa_HfxCdScqI-1Q2yA6y2c7O-qA/view?usp=sharing";

const RULE: &str = "────────────────────────────────────────";

pub fn welcome() -> Content {
    Content::pre().text(concat!(
        "╔══════════════════════════════════════════════════════════╗\n",
        "║                                                     ║\n",
        "║   Welcome to Dhanush's Portfolio Terminal v1.0      ║\n",
        "║                                                     ║\n",
        "║   Type 'help' to see available commands.            ║\n",
        "║                                                     ║\n",
        "╚══════════════════════════════════════════════════════════╝",
    ))
}

pub fn about() -> Content {
    Content::pre().text(concat!(
        "About\n",
        "─────\n\n",
        "Computer Science Engineering undergraduate at VIT-AP\n",
        "University with experience in building scalable backend\n",
        "systems, applied AI, and software engineering.\n\n",
        "Previously, Backend Developer Intern at StudyCubs, where\n",
        "I developed real-time analytics pipelines and LLM-powered\n",
        "automation tools, delivering insights with sub-200ms\n",
        "latency. At AK Capital Advisors, I designed secure APIs\n",
        "and optimized database systems supporting large-scale\n",
        "financial workflows across microservices.\n\n",
        "Currently, Co-Lead of Deep Learning & Computer Vision\n",
        "Team at The Machine Learning Club VIT-AP, leading\n",
        "technical initiatives, mentoring teams, and driving\n",
        "research in generative models and training optimization.\n",
    ))
}

pub fn experience() -> Content {
    Content::pre()
        .text("Work Experience\n───────────────\n\nBackend Developer Intern\n")
        .link("StudyCubs", "https://www.linkedin.com/company/study-cubs/")
        .text(concat!(
            "\n",
            "Dec 2025 – Jan 2026\n",
            "Pune, Maharashtra, India · Remote\n\n",
            "– Built a centralized analytics platform integrating\n",
            "  Terra API data to enable real-time monitoring for\n",
            "  5k+ users.\n",
            "– Implemented FastAPI pipelines to process 40+ days of\n",
            "  historical and streaming data with 200ms latency.\n",
            "– Modernized data access using PostgreSQL JSONB schemas\n",
            "  and LLM-powered queries, reducing analysis effort\n",
            "  by 50%.\n",
            "– Tech Stack: Python, FastAPI, SQLAlchemy, PostgreSQL,\n",
            "  Alembic, Postman, Git, GitHub\n\n",
        ))
        .text(RULE)
        .text("\n\nBackend Developer Intern\n")
        .link(
            "AK Capital Advisors",
            "https://www.linkedin.com/company/ak-capital-advisors/",
        )
        .text(concat!(
            "\n",
            "Jun 2025 – Aug 2025\n",
            "Pune, Maharashtra, India · Remote\n\n",
            "– Developed secure backend systems to streamline digital\n",
            "  credit card applications, supporting 1k+ monthly\n",
            "  submissions.\n",
            "– Architected 30+ APIs using JWT authentication and rate\n",
            "  limiting, reducing invalid requests by 40%.\n",
            "– Designed microservice architecture with PostgreSQL and\n",
            "  Alembic migrations, improving deployment stability\n",
            "  by 35%.\n",
            "– Tech Stack: Python, FastAPI, SQLAlchemy, PostgreSQL,\n",
            "  Alembic, Supabase, Postman, Git, GitHub\n",
        ))
}

pub fn projects() -> Content {
    Content::pre()
        .text("Projects\n────────\n\n")
        .link("EduToolsHub", "https://github.com/kvdhanush06/EduToolsHub")
        .text(concat!(
            "\n",
            "Workflow Automation Platform\n\n",
            "– Automated academic workflow management through task\n",
            "  scheduling services, improving student productivity.\n",
            "– Integrated external content APIs to aggregate learning\n",
            "  resources, reducing manual research time by 40%.\n",
            "– Tech Stack: Python, Django, REST APIs, Requests,\n",
            "  YouTube API, Wikipedia API\n\n",
        ))
        .text(RULE)
        .text("\n\n")
        .link("SociaSphere", "https://github.com/kvdhanush06/SociaSphere")
        .text(concat!(
            "\n",
            "Social Media Platform Backend\n\n",
            "– Engineered scalable authentication and media services\n",
            "  to support concurrent user activity on the platform.\n",
            "– Optimized feed generation using indexed queries and\n",
            "  caching strategies, cutting average response time\n",
            "  by 30%.\n",
            "– Tech Stack: Python, Django, Pillow, REST APIs\n\n",
        ))
        .text(RULE)
        .text("\n\n")
        .link("United", "https://github.com/kvdhanush06/united")
        .text(concat!(
            "\n",
            "Real-Time Tournament Platform\n\n",
            "– Built a real-time tournament management system with\n",
            "  secure authentication and live leaderboard\n",
            "  synchronization.\n",
            "– Developed a React SPA with lazy-loaded routes,\n",
            "  reducing initial load time by 40%.\n",
            "– Designed scalable frontend architecture for multi-user\n",
            "  competition workflows.\n",
            "– Tech Stack: React, Firebase Authentication, Firestore,\n",
            "  Google OAuth, Serverless Backend, Auth State Management,\n",
            "  Environment Configuration, Client-Side Validation,\n",
            "  Firebase Analytics\n",
        ))
}

pub fn skills() -> Content {
    Content::pre().text(concat!(
        "Skills\n",
        "──────\n\n",
        "Languages\n",
        "  Python, JavaScript, Java, C, C++, SQL\n\n",
        "Backend & Systems\n",
        "  FastAPI, Django, Flask, Node.js, React,\n",
        "  REST APIs, JSON Web Token (JWT), Google OAuth,\n",
        "  Microservices, Serverless Backend,\n",
        "  Auth State Management, Client-Side Validation,\n",
        "  Caching\n\n",
        "Databases & Cloud\n",
        "  PostgreSQL, Supabase, Firebase,\n",
        "  Firebase Authentication, Firestore,\n",
        "  Firebase Analytics,\n",
        "  Amazon Web Services (AWS),\n",
        "  Oracle Cloud Infrastructure (OCI),\n",
        "  Render, Query Optimization\n\n",
        "Data & Machine Learning\n",
        "  PyTorch, TensorFlow, OpenCV, Scikit-Learn,\n",
        "  Pandas, NumPy, Matplotlib, MediaPipe,\n",
        "  Pillow, SQLAlchemy\n\n",
        "Generative AI\n",
        "  Generative AI,\n",
        "  Generative Adversarial Networks (GANs),\n",
        "  Large Language Models (LLM),\n",
        "  Transformer Models, LangChain,\n",
        "  Retrieval Augmented Generation (RAG),\n",
        "  Prompt Engineering, Fine Tuning,\n",
        "  AI Agents, Vector Databases\n\n",
        "Tools\n",
        "  Git, GitHub, Alembic, Postman, Jupyter,\n",
        "  Requests, YouTube API, Wikipedia API,\n",
        "  Environment Configuration\n",
    ))
}

pub fn certifications() -> Content {
    Content::pre()
        .text("Certifications\n──────────────\n\nOracle\n")
        .link(
            "Oracle Cloud Infrastructure 2025 — Certified Generative AI Professional",
            "https://catalog-education.oracle.com/ords/certview/sharebadge?id=9A0A7CC8C8DBBE15A972B3642518E75372D91D22C1E469A9DCBB6D2E2750F162",
        )
        .text("\nJul 2025\n\nNVIDIA\n")
        .link(
            "Building LLM Applications With Prompt Engineering",
            "https://learn.nvidia.com/certificates?id=fZPQ-F1qQWOVo1SjcbS9wA",
        )
        .text("\nApr 2025\n")
}

pub fn positions() -> Content {
    Content::pre()
        .text("Positions of Responsibility\n───────────────────────────\n\n")
        .link(
            "The Machine Learning Club VIT-AP",
            "https://www.linkedin.com/company/machinelearningclubvitap/",
        )
        .text(concat!(
            "\n",
            "Part-time · 2 yrs 6 mos\n",
            "Amaravati, Andhra Pradesh, India · On-site\n\n",
        ))
        .text(RULE)
        .text(concat!(
            "\n\n",
            "Co-Lead of Deep Learning & Computer Vision Team\n",
            "Aug 2025 – Present · 6 mos\n\n",
            "– Coordinated a 12-member technical team and structured\n",
            "  project delivery pipelines to improve execution\n",
            "  efficiency.\n",
            "– Directed development of GAN-based image synthesis\n",
            "  systems, enabling automated sketch-to-image\n",
            "  generation.\n",
            "– Established model monitoring and evaluation workflows,\n",
            "  reducing training failures by 25%.\n",
            "– Tech Stack: Python, TensorFlow, OpenCV, Git\n\n",
        ))
        .text(RULE)
        .text(concat!(
            "\n\n",
            "Member of Deep Learning Team\n",
            "Sep 2024 – Aug 2025 · 1 yr\n\n",
            "– Engineered a real-time computer vision pipeline using\n",
            "  OpenCV and PyTorch, achieving 90%+ accuracy at 30 FPS.\n",
            "– Documented Transformer and self-attention architectures\n",
            "  to standardize team onboarding and knowledge sharing.\n",
            "– Improved model convergence by tuning non-convex\n",
            "  optimization and gradient descent methods for stable\n",
            "  training.\n",
            "– Tech Stack: Python, PyTorch, OpenCV, MediaPipe,\n",
            "  NumPy, Git\n\n",
        ))
        .text(RULE)
        .text(concat!(
            "\n\n",
            "Member of Research Team\n",
            "Oct 2023 – Sep 2024 · 1 yr\n\n",
            "– Built automated data preprocessing and feature\n",
            "  engineering pipelines, improving dataset consistency\n",
            "  by 20%.\n",
            "– Optimized and benchmarked Scikit-Learn models to\n",
            "  enable reliable performance comparison across\n",
            "  experiments.\n",
            "– Documented BERT-based NLP architectures to standardize\n",
            "  model development and experimentation workflows.\n",
            "– Tech Stack: Python, Scikit-Learn, Pandas, Matplotlib,\n",
            "  Jupyter, Git\n",
        ))
}

pub fn awards() -> Content {
    Content::pre().text(concat!(
        "Honors & Awards\n",
        "───────────────\n\n",
        "Smart India Hackathon 2023 —\n",
        "National Round Qualifier (Team Leader)\n",
        "Issued by VIT-AP · Sep 2023\n\n",
        "– Led a 5-member team to develop a time-series-based\n",
        "  weather forecasting system with 7-day prediction\n",
        "  horizon.\n",
        "– Built an end-to-end pipeline processing 10k+\n",
        "  historical records from data ingestion to web\n",
        "  deployment.\n",
        "– Improved model accuracy by ~20% through feature\n",
        "  engineering and hyperparameter tuning.\n",
    ))
}

pub fn education() -> Content {
    Content::pre().text(concat!(
        "Education\n",
        "─────────\n\n",
        "VIT-AP University\n",
        "Bachelor of Technology, Computer Science & Engineering\n",
        "Sep 2023 – Jun 2027\n",
    ))
}

pub fn contact() -> Content {
    Content::pre()
        .text("Contact Me\n──────────\n\nEmail     ")
        .link("kvdhanush06@gmail.com", "mailto:kvdhanush06@gmail.com")
        .text("\nLinkedIn  ")
        .link(
            "linkedin.com/in/venkata-dhanush-k",
            "https://www.linkedin.com/in/venkata-dhanush-k/",
        )
        .text("\n")
}

pub fn socials() -> Content {
    Content::pre()
        .text("Socials\n───────\n\nGitHub    ")
        .link("github.com/kvdhanush06", "https://github.com/kvdhanush06")
        .text("\nYouTube   ")
        .link(
            "youtube.com/@kvdhanush0608",
            "https://www.youtube.com/@kvdhanush0608",
        )
        .text("\n")
}

pub fn resume_notice() -> Content {
    Content::inline().text("Opening resume in new tab...")
}
