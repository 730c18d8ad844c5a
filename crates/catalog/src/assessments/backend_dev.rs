use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "core",
            "1. Core Backend Fundamentals",
            vec![
                Question::written("core_1", "Explain the difference between a monolithic and microservices architecture."),
                Question::written("core_2", "How do APIs enable frontend-backend communication?"),
                Question::written("core_3", "What is the difference between REST and GraphQL APIs?"),
                Question::written("core_4", "Can you explain the concept of middleware in backend frameworks?"),
                Question::written("core_5", "How would you handle environment variables securely in a project?"),
            ],
        ),
        Phase::new(
            "databases",
            "2. Databases & Data Modeling",
            vec![
                Question::written("db_1", "Difference between SQL and NoSQL databases?"),
                Question::written("db_2", "Give an example use case for each."),
                Question::written("db_3", "How would you design a schema for an e-commerce product catalog?"),
                Question::written("db_4", "Explain the concept of database normalization."),
                Question::written("db_5", "What’s an index in a database, and when should you use one?"),
                Question::written("db_6", "How do you handle relationships in MongoDB vs. PostgreSQL?"),
            ],
        ),
        Phase::new(
            "auth",
            "3. Authentication & Security",
            vec![
                Question::written("auth_1", "Difference between session-based and token-based authentication?"),
                Question::written("auth_2", "How does OAuth2 work?"),
                Question::written("auth_3", "Explain the concept of JWT and its risks."),
                Question::written("auth_4", "What’s the role of hashing and salting passwords?"),
                Question::written("auth_5", "How do you prevent SQL Injection attacks?"),
            ],
        ),
        Phase::new(
            "performance",
            "4. Performance & Scalability",
            vec![
                Question::written("perf_1", "What is caching, and where would you apply it in backend systems?"),
                Question::written("perf_2", "Explain horizontal vs. vertical scaling with an example."),
                Question::written("perf_3", "How would you optimize a slow-running query?"),
                Question::written("perf_4", "What is load balancing, and why is it important?"),
                Question::written("perf_5", "Difference between synchronous and asynchronous processing in backend apps?"),
            ],
        ),
        Phase::new(
            "apis",
            "5. APIs & Communication",
            vec![
                Question::written("api_1", "What is an API rate limit and why is it important?"),
                Question::written("api_2", "Difference between PUT, PATCH, and POST in REST?"),
                Question::written("api_3", "How do you handle API versioning?"),
                Question::written("api_4", "What are webhooks, and how are they different from APIs?"),
                Question::written("api_5", "How do you ensure backward compatibility in APIs?"),
            ],
        ),
        Phase::new(
            "cloud",
            "6. Cloud & Deployment",
            vec![
                Question::written("cloud_1", "Difference between serverless functions and traditional backend servers?"),
                Question::written("cloud_2", "What is Docker, and why is it used in backend development?"),
                Question::written("cloud_3", "Explain the concept of CI/CD in backend projects."),
                Question::written("cloud_4", "How would you set up a staging environment for a backend application?"),
                Question::written("cloud_5", "Difference between AWS Lambda and EC2?"),
            ],
        ),
        Phase::new(
            "advanced",
            "7. Advanced Backend Patterns",
            vec![
                Question::written("adv_1", "What is the Repository pattern and why is it used?"),
                Question::written("adv_2", "Explain the difference between message queues (e.g., RabbitMQ, Kafka) and APIs."),
                Question::written("adv_3", "What’s eventual consistency, and where is it acceptable?"),
                Question::written("adv_4", "How do you implement rate-limiting in an API?"),
                Question::written("adv_5", "What is a distributed transaction, and how is it handled?"),
            ],
        ),
        Phase::new(
            "testing",
            "8. Testing & Debugging",
            vec![
                Question::written("test_1", "How do you test API endpoints?"),
                Question::written("test_2", "Difference between unit tests, integration tests, and end-to-end tests?"),
                Question::written("test_3", "How would you debug a memory leak in a backend service?"),
                Question::written("test_4", "What tools do you use for load testing backend systems?"),
                Question::written("test_5", "How do you mock external APIs for testing purposes?"),
            ],
        ),
        Phase::new(
            "scenarios",
            "9. Real-World Application Scenarios",
            vec![
                Question::written("scen_1", "A client’s e-commerce site crashes during Black Friday due to traffic. How would you fix and prevent this in the future?"),
                Question::written("scen_2", "A user reports they can access another user’s data. Walk me through your investigation."),
                Question::written("scen_3", "How do you handle file uploads and storage at scale?"),
                Question::written("scen_4", "If a mobile app keeps sending repeated requests to your API, how would you safeguard performance?"),
                Question::written("scen_5", "A payment system must never lose transactions—what’s your design approach?"),
            ],
        ),
        Phase::new(
            "softSkills",
            "10. Soft Skills & Client Management",
            vec![
                Question::written("soft_1", "How do you explain backend timelines and limitations to a non-technical client?"),
                Question::written("soft_2", "When collaborating with frontend developers, what’s the biggest source of friction and how do you solve it?"),
                Question::written("soft_3", "How do you prioritize bug fixes vs. new feature development when both are urgent?"),
                Question::written("soft_4", "Describe a time when backend infrastructure changes saved money for a client."),
                Question::written("soft_5", "If a client insists on using a technology you know is not scalable, how do you handle it?"),
            ],
        ),
    ]
}
