//! Reference documents for content categories and job roles.
//!
//! These are keyword blocks, not prose. Scores are cosine similarities against
//! them, so any edit here shifts every score; bump [`REFERENCE_CORPUS_VERSION`]
//! when changing a table.

pub const REFERENCE_CORPUS_VERSION: u32 = 1;

pub const TECHNICAL_SKILLS_REFERENCE: &str = "
    Programming Languages: Python Java JavaScript TypeScript C++ C# PHP Ruby Go Rust Swift Kotlin
    Web Development: HTML CSS React Angular Vue.js Node.js Express.js Django Flask Spring Boot
    Data Science: Machine Learning Deep Learning TensorFlow PyTorch scikit-learn Pandas NumPy
    Database: SQL MySQL PostgreSQL MongoDB Redis Cassandra Oracle
    Cloud: AWS Azure Google Cloud Kubernetes Docker Terraform
    DevOps: CI/CD Jenkins GitHub Actions Travis CI CircleCI
    Mobile: iOS Android React Native Flutter
    Tools: Git GitHub GitLab Jira Confluence Slack
";

pub const EDUCATION_REFERENCE: &str = "
    Degree Bachelor Master PhD MBA Associate Diploma Certificate
    University College School Institute Academy
    GPA Academic Honors Dean's List Cum Laude Magna Cum Laude Summa Cum Laude
    Scholarship Fellowship Grant Award
    Major Minor Concentration Specialization
    Coursework Projects Research Thesis Dissertation
    Graduated Completed Earned Received
";

pub const EXPERIENCE_REFERENCE: &str = "
    Years Experience Professional Career Job Work Position Role
    Responsibility Duties Tasks Achievements Accomplishments Results
    Team Lead Manage Supervise Coordinate Collaborate
    Project Develop Implement Design Create Build Maintain
    Improve Enhance Optimize Streamline Increase Decrease
    Client Customer Stakeholder User
    Business Strategy Objective Goal Target Metric
    Problem Solution Challenge Opportunity Initiative
";

pub const ACHIEVEMENTS_REFERENCE: &str = "
    Achievement Award Recognition Accomplishment Success
    Improved Increased Decreased Reduced Enhanced Optimized
    Saved Generated Delivered Launched Implemented
    Led Managed Supervised Coordinated Collaborated
    Exceeded Target Goal Objective Metric KPI
    Innovation Creative Solution Approach Method
    Impact Result Outcome Effect Benefit Value
    Recognized Awarded Honored Commended Praised
";

pub const FORMATTING_REFERENCE: &str = "
    Format Layout Structure Organization Design
    Clear Concise Consistent Professional Readable
    Bullet Points Sections Headings Subheadings
    Font Size Spacing Margin Alignment
    Resume CV Curriculum Vitae
    One Page Two Page Length
    Contact Information Header Footer
    Summary Profile Objective Statement
    Keywords ATS Applicant Tracking System
";

pub const SOFTWARE_ENGINEER_REFERENCE: &str = "
    Software Engineer Developer Programmer Coder Full-stack Backend Frontend
    Python Java JavaScript TypeScript C++ C# PHP Ruby Go
    React Angular Vue.js Node.js Express.js Django Flask Spring Boot
    Git GitHub GitLab Version Control
    Agile Scrum Kanban Jira
    API REST GraphQL Microservices
    Testing Unit Integration Automated
    Database SQL NoSQL MySQL PostgreSQL MongoDB
    Cloud AWS Azure Google Cloud
    DevOps CI/CD Docker Kubernetes
";

pub const DATA_SCIENTIST_REFERENCE: &str = "
    Data Scientist Analyst Machine Learning Engineer AI
    Python R SQL
    Machine Learning Deep Learning Neural Networks
    TensorFlow PyTorch Keras scikit-learn
    Data Analysis Data Visualization Data Mining
    Statistics Probability Regression Classification Clustering
    Pandas NumPy SciPy Matplotlib Seaborn
    Big Data Hadoop Spark
    A/B Testing Hypothesis Testing
    NLP Computer Vision Time Series
";

pub const PRODUCT_MANAGER_REFERENCE: &str = "
    Product Manager Product Owner
    Product Development Product Strategy Product Roadmap
    User Experience UX UI Design
    Market Research Competitive Analysis
    Customer Feedback User Testing
    Agile Scrum Kanban
    Stakeholder Management
    Business Requirements Technical Requirements
    KPIs Metrics Analytics
    Go-to-market Launch Strategy
    Cross-functional Teams
    Prioritization Backlog Management
";

pub const MARKETING_REFERENCE: &str = "
    Marketing Digital Marketing Content Marketing Social Media Marketing
    SEO SEM PPC Google Ads Facebook Ads
    Content Strategy Content Creation
    Social Media Management
    Email Marketing Campaigns
    Analytics Google Analytics
    CRM Customer Relationship Management
    Brand Management Brand Strategy
    Market Research Competitive Analysis
    Lead Generation Conversion Rate Optimization
    Marketing Automation
";

pub const FINANCE_REFERENCE: &str = "
    Finance Financial Accounting Accountant
    Financial Analysis Financial Reporting Financial Planning
    Budgeting Forecasting Modeling
    Excel VBA PowerPoint
    Profit Loss Balance Sheet Cash Flow
    Audit Tax Compliance
    Risk Management
    Investment Banking Valuation
    CPA CFA MBA
    SAP Oracle Quickbooks
";
