mod quiz_vm;

pub use quiz_vm::{
    ChoiceVm, QuestionVm, QuizVm, ResultVm, ScreenVm, load_quiz, map_question, map_result,
    map_screen,
};
