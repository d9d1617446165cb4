use manabi_model::course::{ContentType, NewContent, NewCourse, StudentRef};
use manabi_model::id::UserId;
use manabi_model::quiz::{NewQuiz, Question};
use manabi_model::user::{Role, SessionUser};

pub fn instructor() -> SessionUser {
    SessionUser {
        id: UserId::new("u-instructor"),
        name: "Aiko Tanaka".to_owned(),
        email: "aiko@example.com".to_owned(),
        role: Role::Instructor,
        token: "token-instructor".to_owned(),
    }
}

pub fn student(id: &str, name: &str) -> StudentRef {
    StudentRef {
        id: UserId::new(id),
        name: name.to_owned(),
    }
}

pub fn new_course(title: &str) -> NewCourse {
    NewCourse {
        title: title.to_owned(),
        description: format!("{title} from first principles"),
        video_url: None,
    }
}

pub fn new_content(title: &str) -> NewContent {
    NewContent {
        r#type: ContentType::Video,
        title: title.to_owned(),
        description: String::new(),
        url: Some(format!("https://videos.example.com/{title}.mp4")),
    }
}

pub fn question(correct_answer: usize, marks: u32) -> Question {
    Question {
        question: "Which option is right?".to_owned(),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct_answer,
        marks,
    }
}

pub fn new_quiz(questions: Vec<Question>) -> NewQuiz {
    NewQuiz {
        title: "Checkpoint".to_owned(),
        description: String::new(),
        questions,
        passing_score: None,
    }
}
